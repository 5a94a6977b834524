//! Folio Core Library
//!
//! Content, theme and animation logic for the Folio portfolio page.
//!
//! ## Overview
//!
//! Everything here is independent of the UI toolkit:
//!
//! - **Content**: the immutable portfolio records and the derived views the
//!   renderer needs (display order, skill groups, initials)
//! - **Theme**: light/dark controller with persisted storage and an ambient
//!   preference fallback
//! - **Interaction**: menu, scroll throttle, contact form and smooth-scroll
//!   state machines
//! - **Animation**: visibility policy and one-shot triggers for section
//!   reveals, skill bars and counters
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ContentRepository, FileThemeStore, ThemeController};
//!
//! let content = ContentRepository::builtin();
//! content.validate()?;
//!
//! let mut theme = ThemeController::initialize(FileThemeStore::in_dir(data_dir), &None);
//! theme.toggle();
//! ```

pub mod animation;
pub mod content;
pub mod error;
pub mod interaction;
pub mod storage;
pub mod theme;

// Re-exports
pub use animation::{
    AnimationEngine, Counter, Effect, ElementId, ElementKey, ElementState, Presentation, Rect,
    Target, VisibilityEntry, VisibilityPolicy,
};
pub use content::{
    ContentRepository, NavItem, PersonalInfo, Project, Section, Skill, SkillCategory, SkillGroup,
    SocialLink, Stat,
};
pub use error::{FolioError, FolioResult};
pub use interaction::{ContactField, ContactForm, MenuState, ScrollThrottle, SubmitStatus};
pub use storage::{FileThemeStore, MemoryThemeStore, ThemeStore};
pub use theme::{ColorSchemePreference, Theme, ThemeController};
