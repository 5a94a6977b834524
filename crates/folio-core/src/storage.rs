//! Persisted theme storage.
//!
//! The only persisted state is the theme name. [`FileThemeStore`] keeps it in
//! a small JSON document inside the data directory; [`MemoryThemeStore`]
//! keeps it in process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::theme::Theme;

/// File name of the theme document inside the data directory.
pub const THEME_FILE: &str = "theme.json";

/// Key-value slot holding the persisted theme.
pub trait ThemeStore {
    /// Persisted theme, `None` when absent or unreadable.
    fn load(&self) -> Option<Theme>;

    fn save(&mut self, theme: Theme) -> FolioResult<()>;
}

impl ThemeStore for Box<dyn ThemeStore> {
    fn load(&self) -> Option<Theme> {
        (**self).load()
    }

    fn save(&mut self, theme: Theme) -> FolioResult<()> {
        (**self).save(theme)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeDocument {
    theme: Theme,
}

/// Theme stored as `{"theme": "<name>"}` in a JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/theme.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(THEME_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<Theme> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return None,
        };

        match serde_json::from_slice::<ThemeDocument>(&bytes) {
            Ok(doc) => Some(doc.theme),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring malformed theme file");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> FolioResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec(&ThemeDocument { theme })?;
        fs::write(&self.path, json)
            .map_err(|e| FolioError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

/// In-process store; nothing survives a restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn with(theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.theme
    }

    fn save(&mut self, theme: Theme) -> FolioResult<()> {
        self.theme = Some(theme);
        Ok(())
    }
}
