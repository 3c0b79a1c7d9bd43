use crate::state::app::{ use_board_action, BoardAction };
use crate::state::config::{ AppConfig, Theme };
use crate::utils::config::create_config_updater;
use crate::utils::constants::APP_NAME;

use dioxus::prelude::*;
use lucide_dioxus::{ Moon, Save, Sun };

#[component]
pub fn Header() -> Element {
    // Shared config signal provided by the app root
    let config: Signal<AppConfig> = use_context();
    let update_config = create_config_updater(config);

    let board_action = use_board_action();

    let theme = config().theme;

    rsx! {
      header { class: "app-header",
        h1 { "{APP_NAME}" }

        div { class: "header-actions",
          button {
            class: "header-button",
            title: "Toggle theme",
            onclick: move |_| {
                update_config(
                    Box::new(|config: &mut AppConfig| {
                        config.theme = config.theme.toggled();
                    })
                );
            },
            if theme == Theme::Dark {
              Sun { class: "icon" }
            } else {
              Moon { class: "icon" }
            }
          }

          button {
            class: "header-button",
            onclick: move |_| board_action.call(BoardAction::Save),
            Save { class: "icon" }
            "Save all cards"
          }
        }
      }
    }
}
