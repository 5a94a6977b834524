use dioxus::prelude::*;

/// Shown in place of the page when content fails to load or rendering fails.
#[component]
pub fn Fallback(#[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div { class: "error-message",
            h1 { "Portfolio" }
            p { "An error occurred loading the portfolio. Please refresh the page." }
            if let Some(detail) = detail {
                p { class: "error-detail", "{detail}" }
            }
        }
    }
}
