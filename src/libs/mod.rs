pub mod ticker;
pub mod ui;

// Re-export the refresh handle where components expect it
pub use ticker::TickerHandle;
