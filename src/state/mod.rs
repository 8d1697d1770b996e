//! Application state shared across pages.
//!
//! Each page owns its own widget state; what lives here is the state the
//! app loop owns on top of whichever page is current.

pub mod global;

pub use global::GlobalState;

use crate::widgets::DialogVariant;

/// A blocking message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub content: String,
    pub variant: DialogVariant,
}
