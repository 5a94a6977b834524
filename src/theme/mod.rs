//! Page styling.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Icon font used by every section.
pub const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
