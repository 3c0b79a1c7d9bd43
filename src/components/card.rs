use crate::libs::ticker::{ TickerHandle, REFRESH_INTERVAL_MS };
use crate::utils::delay;
use crate::utils::time;

use dioxus::prelude::*;

/// A single board card with a self-refreshing relative-time label.
///
/// The label is recomputed immediately when the card mounts and then once a
/// minute while it stays mounted. The running cycle is cancelled when the
/// card unmounts or when `created_at` changes; a changed timestamp starts a
/// fresh cycle for the new value.
#[component]
pub fn KanbanCard(title: String, created_at: String) -> Element {
    let mut display_time = use_signal(String::new);
    let mut ticker = use_signal(|| None::<TickerHandle>);

    use_effect(
        use_reactive((&created_at,), move |(created_at,)| {
            // A new timestamp invalidates the previous cycle before its next tick
            if let Some(previous) = ticker.peek().as_ref() {
                previous.cancel();
            }
            let handle = TickerHandle::new();
            ticker.set(Some(handle.clone()));

            spawn(async move {
                while handle.is_active() {
                    display_time.set(time::relative_label_now(&created_at));
                    delay::Delay::ms(REFRESH_INTERVAL_MS).await;
                }
            });
        })
    );

    // Unmount stops the cycle for good; the scope also drops the spawned task
    use_drop(move || {
        if let Some(handle) = ticker.peek().as_ref() {
            handle.cancel();
        }
    });

    rsx! {
      li { class: "kanban-card",
        div { class: "card-title", "{title}" }
        div { class: "card-time", title: "{created_at}", "{display_time}" }
      }
    }
}
