//! Global application state shared across all screens.

use super::Notice;
use crate::widgets::DialogVariant;

/// Global state that persists across screen changes.
///
/// This state contains information that is relevant across all screens
/// and shouldn't be reset when navigating between screens.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Blocking notice shown on top of the current page.
    pub notice: Option<Notice>,

    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,
}

impl GlobalState {
    /// Create a new global state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any notice or overlay is shown.
    pub fn has_overlay(&self) -> bool {
        self.notice.is_some() || self.show_help_overlay
    }

    /// Show a blocking notice.
    pub fn show_notice(&mut self, title: String, content: String, variant: DialogVariant) {
        self.notice = Some(Notice {
            title,
            content,
            variant,
        });
    }

    /// Close the open notice, returning it.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }
}
