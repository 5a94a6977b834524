//! About section - biography and animated stats.

use dioxus::prelude::*;
use folio_core::{ElementKey, Presentation, Section, Stat};

use super::{PageSection, TrackedNode};

#[component]
pub fn About(
    bio: Vec<String>,
    stats: Vec<Stat>,
    #[props(default)] presentation: Presentation,
    #[props(default)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    rsx! {
        PageSection {
            section: Section::About,
            badge: "About Me".to_string(),
            title: "Building Digital Excellence".to_string(),
            revealed: presentation.is_revealed(Section::About),
            on_mount: on_mount,
            div { class: "about-content",
                div { class: "about-text",
                    for (index, paragraph) in bio.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                    div { class: "about-stats",
                        for (index, stat) in stats.iter().enumerate() {
                            StatItem {
                                key: "{index}",
                                index: index,
                                stat: stat.clone(),
                                text: presentation.counter_text(index, stat),
                                on_mount: on_mount,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One stat block. The counter text starts at zero; `data-target` holds the
/// value it counts up to.
#[component]
fn StatItem(
    index: usize,
    stat: Stat,
    text: String,
    #[props(!optional)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    rsx! {
        div { class: "stat-item",
            div {
                class: "stat-number",
                "data-target": "{stat.value}",
                onmounted: move |evt| {
                    if let Some(handler) = on_mount {
                        handler.call(TrackedNode {
                            key: ElementKey::Counter(index),
                            node: evt.data(),
                        });
                    }
                },
                "{text}"
            }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}
