// Event-driven board state manager
use crate::state::board::BoardData;
use crate::{ debug_print, always_eprint };
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Mutex;

/// Global board state shared between components
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub board: BoardData,
}

impl BoardState {
    pub fn new() -> Self {
        debug_print!("🌍 Initializing global board state...");
        Self {
            board: BoardData::load(),
        }
    }
}

// Global state instance
static GLOBAL_BOARD_STATE: OnceCell<Mutex<BoardState>> = OnceCell::new();

// Initialize the board store - call this once at startup
pub fn init_board_state() {
    if GLOBAL_BOARD_STATE.get().is_none() {
        let _ = GLOBAL_BOARD_STATE.set(Mutex::new(BoardState::new()));
    }
}

/// Simple hook for read-only access to the current board
pub fn use_board() -> BoardData {
    let update_signal: Signal<u32> = use_context();

    let board = use_memo(move || {
        let _ = update_signal();
        // Subscribe to board changes
        if let Some(global_state) = GLOBAL_BOARD_STATE.get() {
            if let Ok(state) = global_state.lock() {
                return state.board.clone();
            }
        }
        BoardData::default()
    });

    let result = board.read().clone();
    result
}

/// Board mutations, applied through the global store
pub enum BoardAction {
    /// Create a card at the front of the todo column
    AddCard(String),
    /// Persist the whole board to disk
    Save,
}

/// Hook returning a callback that applies a board action and triggers a redraw
pub fn use_board_action() -> Callback<BoardAction> {
    let mut update_signal: Signal<u32> = use_context();
    use_callback(move |action: BoardAction| {
        if let Some(global_state) = GLOBAL_BOARD_STATE.get() {
            if let Ok(mut state) = global_state.lock() {
                match action {
                    BoardAction::AddCard(title) => {
                        state.board.add_card(title);
                        debug_print!("🗂️ Card added ({} in todo)", state.board.todo.len());

                        if crate::state::config::AppConfig::load().autosave {
                            if let Err(e) = state.board.save() {
                                always_eprint!("❌ Autosave failed: {}", e);
                            }
                        }
                    }
                    BoardAction::Save => {
                        match state.board.save() {
                            Ok(_) => debug_print!("💾 Board saved"),
                            Err(e) => always_eprint!("❌ Failed to save board: {}", e),
                        }
                    }
                }
            }
        }
        // Trigger UI update by incrementing the signal value
        let current_value = {
            let val = update_signal.read();
            *val
        };
        update_signal.set(current_value + 1);
    })
}
