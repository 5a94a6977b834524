use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{ContentRepository, ThemeController};
use folio_ui::Fallback;

use crate::context::{AppContext, Startup, ThemeState, WindowPreference};
use crate::pages::Portfolio;
use crate::theme::{FONT_AWESOME, GLOBAL_STYLES};

/// Root application component.
///
/// Resolves the theme, provides the app context and renders the page, or the
/// fallback message when content failed to load or rendering failed.
#[component]
pub fn App() -> Element {
    let startup = use_context::<Startup>();
    let theme: Signal<ThemeState> = use_signal({
        let startup = startup.clone();
        move || ThemeController::initialize(startup.theme_store(), &WindowPreference)
    });

    let data_theme = theme.read().attribute().map(|theme| theme.as_str());

    let body = match startup.content {
        Ok(content) => rsx! {
            ErrorBoundary {
                handle_error: |_: ErrorContext| {
                    tracing::error!("Portfolio failed to render, showing fallback");
                    rsx! { Fallback {} }
                },
                Site { content: content, theme: theme }
            }
        },
        Err(detail) => rsx! {
            Fallback { detail: detail }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        link { rel: "stylesheet", href: FONT_AWESOME }
        div { id: "app", "data-theme": data_theme,
            {body}
        }
    }
}

#[component]
fn Site(content: Arc<ContentRepository>, theme: Signal<ThemeState>) -> Element {
    use_context_provider(|| AppContext { content, theme });

    rsx! {
        Portfolio {}
    }
}
