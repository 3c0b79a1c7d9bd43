use chrono::Utc;
use serde::{ Deserialize, Serialize };
use strum::Display;
use uuid::Uuid;

use crate::state::paths;
use crate::utils::data;

/// A single kanban card. Title and creation time never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    /// RFC 3339 creation timestamp, assigned once at creation
    pub created_at: String,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// The three fixed board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ColumnKind {
    #[strum(serialize = "To do")]
    Todo,
    #[strum(serialize = "Ongoing")]
    Ongoing,
    #[strum(serialize = "Done")]
    Done,
}

impl ColumnKind {
    /// Column background color
    pub fn accent_color(self) -> &'static str {
        match self {
            ColumnKind::Todo => "#C9AF97",
            ColumnKind::Ongoing => "#FFE799",
            ColumnKind::Done => "#C0E8BA",
        }
    }
}

/// The whole board: one ordered card list per column, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardData {
    pub todo: Vec<Card>,
    pub ongoing: Vec<Card>,
    pub done: Vec<Card>,
}

impl BoardData {
    /// Load the board from disk. A missing or corrupt file means "no prior
    /// state": the board starts empty instead of surfacing an error.
    pub fn load() -> Self {
        let board_path = paths::data::board_json();

        match data::load_json_from_file::<BoardData>(&board_path) {
            Ok(board) => board,
            Err(e) => {
                crate::debug_eprint!("⚠️ No usable board state ({}). Starting empty.", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let board_path = paths::data::board_json();
        data::save_json_to_file(self, &board_path)
    }

    /// New cards always land at the front of the todo column
    pub fn add_card(&mut self, title: impl Into<String>) {
        self.todo.insert(0, Card::new(title));
    }

    pub fn cards(&self, column: ColumnKind) -> &[Card] {
        match column {
            ColumnKind::Todo => &self.todo,
            ColumnKind::Ongoing => &self.ongoing,
            ColumnKind::Done => &self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cards_are_prepended_to_todo() {
        let mut board = BoardData::default();
        board.add_card("first");
        board.add_card("second");

        let titles: Vec<&str> = board.todo.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert!(board.ongoing.is_empty());
        assert!(board.done.is_empty());
    }

    #[test]
    fn cards_carry_a_parseable_creation_timestamp() {
        let card = Card::new("write tests");
        assert!(chrono::DateTime::parse_from_rfc3339(&card.created_at).is_ok());
    }

    #[test]
    fn column_accessor_matches_the_backing_lists() {
        let mut board = BoardData::default();
        board.add_card("only");
        assert_eq!(board.cards(ColumnKind::Todo).len(), 1);
        assert!(board.cards(ColumnKind::Ongoing).is_empty());
        assert!(board.cards(ColumnKind::Done).is_empty());
    }

    #[test]
    fn corrupt_board_json_parses_as_an_error_not_a_panic() {
        let result = serde_json::from_str::<BoardData>("{\"todo\": \"oops\"}");
        assert!(result.is_err());
    }

    #[test]
    fn board_round_trips_through_json() {
        let mut board = BoardData::default();
        board.add_card("persisted");

        let json = serde_json::to_string(&board).unwrap();
        let restored: BoardData = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn column_titles_come_from_the_display_impl() {
        assert_eq!(ColumnKind::Todo.to_string(), "To do");
        assert_eq!(ColumnKind::Ongoing.to_string(), "Ongoing");
        assert_eq!(ColumnKind::Done.to_string(), "Done");
    }
}
