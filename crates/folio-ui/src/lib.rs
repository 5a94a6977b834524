//! Folio UI Components
//!
//! Dioxus components that render the portfolio page from a
//! [`folio_core::ContentRepository`].
//!
//! ## Rendering contract
//!
//! Every section is a pure function of its props: content records plus the
//! current presentation state (theme, menu, revealed sections, bar widths,
//! counter texts, form status). Components never own timers or touch
//! storage. Interactivity is reported upward through optional handlers, so
//! the same components render to a string in tests and drive the live page
//! in the desktop app.
//!
//! Elements the host needs to measure or scroll to report themselves through
//! `on_mount` with a [`TrackedNode`].

pub mod components;

pub use components::*;
