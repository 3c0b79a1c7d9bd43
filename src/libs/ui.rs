use crate::components::board::KanbanBoard;
use crate::components::header::Header;
use crate::utils::config::use_config;
use crate::utils::delay;

use dioxus::prelude::*;

const GLOBAL_STYLES_CSS: &str = include_str!("../../assets/style.css");

pub fn app() -> Element {
    // Loading state shown while the persisted board is read in
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            delay::Delay::ms(100).await;
            is_loading.set(false);
        });
    });

    // Create update signal for event-driven board state management
    let update_signal = use_signal(|| 0u32);
    use_context_provider(|| update_signal);

    // One shared config signal so a theme toggle re-renders the whole tree
    let (config, _update_config) = use_config();
    use_context_provider(|| config);

    let theme = config().theme;

    rsx! {
        style { {GLOBAL_STYLES_CSS} }

        div {
            class: "app",
            "data-theme": "{theme}",

            Header {}

            KanbanBoard { is_loading: is_loading() }
        }
    }
}
