use dioxus::prelude::*;

/// One named board lane: a title bar (with optional extra controls) above an
/// ordered card list
#[component]
pub fn KanbanColumn(
    title: String,
    accent_color: String,
    header_extra: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
      section { class: "kanban-column", style: "background-color: {accent_color};",
        h2 {
          span { "{title}" }
          {header_extra}
        }
        ul { {children} }
      }
    }
}
