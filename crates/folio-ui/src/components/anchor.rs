//! Links
//!
//! In-page anchors (`#section`) are intercepted and reported to the host,
//! which performs the smooth scroll. Everything else opens externally.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::ElementKey;

/// A mounted element the host may measure or scroll to.
#[derive(Clone)]
pub struct TrackedNode {
    pub key: ElementKey,
    pub node: Rc<MountedData>,
}

/// Link that routes `#` anchors through `on_anchor` and opens anything else
/// in a new window.
#[component]
pub fn PageLink(
    href: String,
    #[props(default)] class: String,
    #[props(default)] aria_label: String,
    /// Receives the href of a clicked in-page anchor
    #[props(!optional)]
    on_anchor: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    if href.starts_with('#') {
        let target = href.clone();
        rsx! {
            a {
                href: "{href}",
                class: "{class}",
                "aria-label": "{aria_label}",
                onclick: move |evt| {
                    evt.prevent_default();
                    if let Some(handler) = on_anchor {
                        handler.call(target.clone());
                    }
                },
                {children}
            }
        }
    } else {
        rsx! {
            a {
                href: "{href}",
                class: "{class}",
                "aria-label": "{aria_label}",
                target: "_blank",
                rel: "noopener",
                {children}
            }
        }
    }
}
