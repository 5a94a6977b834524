//! Light/dark theme controller.
//!
//! The controller resolves the initial theme from persisted storage, then the
//! ambient color-scheme preference, then falls back to dark. Applying a theme
//! updates the root attribute and writes the value back to the store; both
//! happen synchronously and applying the same theme twice is a no-op on the
//! observable state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::ThemeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the theme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// Host-provided color-scheme preference, consulted only when nothing is
/// persisted.
pub trait ColorSchemePreference {
    fn preferred(&self) -> Option<Theme>;
}

impl ColorSchemePreference for Option<Theme> {
    fn preferred(&self) -> Option<Theme> {
        *self
    }
}

/// Owns the current theme and keeps the root attribute and the store in sync.
#[derive(Debug)]
pub struct ThemeController<S> {
    current: Theme,
    /// Value last written to the root attribute
    attribute: Option<Theme>,
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Resolve the initial theme and apply it.
    pub fn initialize(store: S, preference: &impl ColorSchemePreference) -> Self {
        let current = match store.load() {
            Some(saved) => saved,
            None => preference.preferred().unwrap_or_default(),
        };

        let mut controller = ThemeController {
            current,
            attribute: None,
            store,
        };
        controller.apply(current);
        tracing::debug!(theme = %current, "Theme initialized");
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Set `theme` on the root attribute and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.attribute = Some(theme);
        if let Err(e) = self.store.save(theme) {
            tracing::warn!(theme = %theme, error = %e, "Failed to persist theme");
        }
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        tracing::debug!(theme = %next, "Theme toggled");
        next
    }

    /// Current value of the root `data-theme` attribute.
    pub fn attribute(&self) -> Option<Theme> {
        self.attribute
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
