//! Hero section - the first screen of the page.

use dioxus::prelude::*;
use folio_core::{ElementKey, PersonalInfo, Section, SocialLink};

use super::{ButtonVariant, PageLink, TrackedNode};

#[component]
pub fn Hero(
    personal: PersonalInfo,
    social_links: Vec<SocialLink>,
    #[props(default)] on_anchor: Option<EventHandler<String>>,
    #[props(default)] on_mount: Option<EventHandler<TrackedNode>>,
) -> Element {
    let id = Section::Home.id();

    rsx! {
        section {
            id: "{id}",
            class: "hero",
            onmounted: move |evt| {
                if let Some(handler) = on_mount {
                    handler.call(TrackedNode {
                        key: ElementKey::Section(Section::Home),
                        node: evt.data(),
                    });
                }
            },
            div { class: "hero-background" }
            div { class: "hero-content",
                div { class: "hero-text",
                    div { class: "hero-badge", "Portfolio {personal.year}" }
                    h1 { class: "hero-title",
                        span { class: "greeting", "Hello, I'm" }
                        span { class: "name", "{personal.name}" }
                    }
                    p { class: "hero-subtitle", "{personal.title}" }
                    p { class: "hero-description", "{personal.description}" }

                    div { class: "hero-buttons",
                        PageLink {
                            href: "#projects".to_string(),
                            class: ButtonVariant::Primary.class().to_string(),
                            on_anchor: on_anchor,
                            span { "View My Work" }
                            i { class: "fas fa-arrow-right" }
                        }
                        PageLink {
                            href: "#contact".to_string(),
                            class: ButtonVariant::Outline.class().to_string(),
                            on_anchor: on_anchor,
                            span { "Get In Touch" }
                            i { class: "fas fa-envelope" }
                        }
                    }

                    div { class: "social-links",
                        for link in social_links.iter() {
                            PageLink {
                                key: "{link.name}",
                                href: link.url.clone(),
                                class: "social-link".to_string(),
                                aria_label: link.name.clone(),
                                on_anchor: on_anchor,
                                i { class: "{link.icon}" }
                            }
                        }
                    }
                }

                div { class: "hero-visual",
                    div { class: "hero-avatar",
                        div { class: "avatar-gradient" }
                        i { class: "fas fa-code" }
                    }
                    div { class: "floating-elements",
                        div { class: "float-icon", style: "--delay: 0s", i { class: "fab fa-react" } }
                        div { class: "float-icon", style: "--delay: 1s", i { class: "fab fa-node-js" } }
                        div { class: "float-icon", style: "--delay: 2s", i { class: "fab fa-python" } }
                    }
                }
            }

            div { class: "scroll-indicator",
                PageLink {
                    href: "#about".to_string(),
                    aria_label: "Scroll down".to_string(),
                    on_anchor: on_anchor,
                    i { class: "fas fa-chevron-down" }
                }
            }
        }
    }
}
