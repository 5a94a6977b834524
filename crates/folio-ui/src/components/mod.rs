//! Section and building-block components for the portfolio page.

mod about;
mod anchor;
mod button;
mod contact;
mod fallback;
mod footer;
mod hero;
mod input;
mod navbar;
mod projects;
mod section;
mod skills;

pub use about::*;
pub use anchor::*;
pub use button::*;
pub use contact::*;
pub use fallback::*;
pub use footer::*;
pub use hero::*;
pub use input::*;
pub use navbar::*;
pub use projects::*;
pub use section::*;
pub use skills::*;
