use dioxus::prelude::*;
use folio_core::{PersonalInfo, SocialLink};

use super::PageLink;

/// Page footer: copyright line and the leading social links.
#[component]
pub fn Footer(
    personal: PersonalInfo,
    links: Vec<SocialLink>,
    #[props(default)] on_anchor: Option<EventHandler<String>>,
) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-content",
                    p { "© {personal.year} {personal.name}. All rights reserved." }
                    div { class: "footer-social",
                        for link in links.iter() {
                            PageLink {
                                key: "{link.name}",
                                href: link.url.clone(),
                                class: "footer-social-link".to_string(),
                                aria_label: link.name.clone(),
                                on_anchor: on_anchor,
                                i { class: "{link.icon}" }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p {
                        "Built with "
                        i { class: "fas fa-heart" }
                        " using Rust, Dioxus and CSS"
                    }
                }
            }
        }
    }
}
