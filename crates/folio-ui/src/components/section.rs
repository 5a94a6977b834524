use dioxus::prelude::*;
use folio_core::{ElementKey, Section};

use super::TrackedNode;

/// Frame shared by the about, skills, projects and contact sections.
///
/// Carries the `animate` class once the section has been revealed and
/// reports itself through `on_mount` so the host can observe it.
#[component]
pub fn PageSection(
    section: Section,
    /// Section title shown under the badge
    title: String,
    badge: String,
    #[props(default = false)] revealed: bool,
    #[props(!optional)] on_mount: Option<EventHandler<TrackedNode>>,
    children: Element,
) -> Element {
    let id = section.id();
    let class = if revealed {
        format!("section {} animate", id)
    } else {
        format!("section {}", id)
    };

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |evt| {
                if let Some(handler) = on_mount {
                    handler.call(TrackedNode {
                        key: ElementKey::Section(section),
                        node: evt.data(),
                    });
                }
            },
            div { class: "container",
                div { class: "section-header",
                    span { class: "section-badge", "{badge}" }
                    h2 { class: "section-title", "{title}" }
                }
                {children}
            }
        }
    }
}
