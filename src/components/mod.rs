pub mod board;
pub mod card;
pub mod column;
pub mod header;
pub mod new_card;
