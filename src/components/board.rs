use crate::components::card::KanbanCard;
use crate::components::column::KanbanColumn;
use crate::components::new_card::KanbanNewCard;
use crate::state::app::{ use_board, use_board_action, BoardAction };
use crate::state::board::ColumnKind;

use dioxus::prelude::*;
use lucide_dioxus::Plus;

/// Background for the placeholder column shown while the board loads
const LOADING_COLOR: &str = "#E3E3E3";

#[component]
pub fn KanbanBoard(is_loading: bool) -> Element {
    let board = use_board();
    let board_action = use_board_action();

    // Whether the card editor is open in the todo column
    let mut show_add = use_signal(|| false);

    if is_loading {
        return rsx! {
          main { class: "kanban-board",
            KanbanColumn {
              title: "Loading...".to_string(),
              accent_color: LOADING_COLOR.to_string(),
            }
          }
        };
    }

    rsx! {
      main { class: "kanban-board",
        KanbanColumn {
          title: ColumnKind::Todo.to_string(),
          accent_color: ColumnKind::Todo.accent_color().to_string(),
          header_extra: rsx! {
            button {
              class: "add-card-button",
              disabled: show_add(),
              onclick: move |_| show_add.set(true),
              Plus { class: "icon" }
              "Add new card"
            }
          },

          if show_add() {
            KanbanNewCard {
              on_submit: move |new_title: String| {
                  board_action.call(BoardAction::AddCard(new_title));
              },
            }
          }
          for card in board.cards(ColumnKind::Todo) {
            KanbanCard {
              key: "{card.id}",
              title: card.title.clone(),
              created_at: card.created_at.clone(),
            }
          }
        }

        KanbanColumn {
          title: ColumnKind::Ongoing.to_string(),
          accent_color: ColumnKind::Ongoing.accent_color().to_string(),
          for card in board.cards(ColumnKind::Ongoing) {
            KanbanCard {
              key: "{card.id}",
              title: card.title.clone(),
              created_at: card.created_at.clone(),
            }
          }
        }

        KanbanColumn {
          title: ColumnKind::Done.to_string(),
          accent_color: ColumnKind::Done.accent_color().to_string(),
          for card in board.cards(ColumnKind::Done) {
            KanbanCard {
              key: "{card.id}",
              title: card.title.clone(),
              created_at: card.created_at.clone(),
            }
          }
        }
      }
    }
}
