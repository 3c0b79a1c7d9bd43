use dioxus::prelude::*;

/// Card creation editor shown at the top of the todo column.
/// Enter submits the trimmed title and clears the input for the next entry.
#[component]
pub fn KanbanNewCard(on_submit: EventHandler<String>) -> Element {
    let mut title = use_signal(String::new);

    rsx! {
      li { class: "kanban-card",
        h3 { "Add new card" }
        div { class: "card-title",
          input {
            r#type: "text",
            value: "{title}",
            // Focus the input as soon as it appears
            onmounted: move |event: Event<MountedData>| async move {
                let _ = event.data().set_focus(true).await;
            },
            oninput: move |event| title.set(event.value()),
            onkeydown: move |event| {
                if event.key() == Key::Enter {
                    let text = title().trim().to_string();
                    if !text.is_empty() {
                        on_submit.call(text);
                    }
                    title.set(String::new());
                }
            },
          }
        }
      }
    }
}
