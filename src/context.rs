//! Application context for the portfolio window.
//!
//! `main` resolves a [`Startup`] value from the command line and hands it to
//! the launcher. The root component turns it into an [`AppContext`] shared
//! with the page through the Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page component
//! let app = use_app();
//! let theme = app.theme.read().current();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{
    ColorSchemePreference, ContentRepository, FileThemeStore, MemoryThemeStore, Theme,
    ThemeController, ThemeStore,
};

/// Theme controller as held by the UI: file backed, or in memory with
/// `--no-persist`.
pub type ThemeState = ThemeController<Box<dyn ThemeStore>>;

/// Everything resolved before the window opens.
#[derive(Clone, Debug)]
pub struct Startup {
    /// Validated content, or the message explaining why loading failed
    pub content: Result<Arc<ContentRepository>, String>,
    /// Directory holding `theme.json`
    pub data_dir: PathBuf,
    /// Whether theme changes are written to disk
    pub persist: bool,
}

impl Startup {
    pub fn theme_store(&self) -> Box<dyn ThemeStore> {
        if self.persist {
            Box::new(FileThemeStore::in_dir(&self.data_dir))
        } else {
            Box::new(MemoryThemeStore::default())
        }
    }
}

/// Color scheme reported by the desktop window.
pub struct WindowPreference;

impl ColorSchemePreference for WindowPreference {
    fn preferred(&self) -> Option<Theme> {
        use dioxus::desktop::tao::window::Theme as WindowTheme;

        match dioxus::desktop::window().window.theme() {
            WindowTheme::Light => Some(Theme::Light),
            WindowTheme::Dark => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Shared state for the page.
#[derive(Clone)]
pub struct AppContext {
    pub content: Arc<ContentRepository>,
    pub theme: Signal<ThemeState>,
}

/// Hook to access the [`AppContext`] provided by the root component.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
