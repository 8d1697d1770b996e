//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move left (card menu, yes/no buttons)
    MoveLeft,
    /// Move right (card menu, yes/no buttons)
    MoveRight,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,

    // ============ Selection & Confirmation ============
    /// Confirm selection / submit form (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,
    /// Flip the selected flashcard
    Flip,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
    /// Switch between the light and dark theme
    ToggleTheme,
    /// Expand or collapse the hub sidebar
    ToggleSidebar,

    // ============ Screen-specific actions ============
    /// Skip the tutorial
    Skip,
    /// Save the flashcard being edited
    Save,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Tab/Field navigation ============
    /// Move to next field
    NextTab,
    /// Move to previous field
    PrevTab,

    // ============ Yes/No prompts ============
    Yes,
    No,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::Flip => "Flip card",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::ToggleTheme => "Toggle light/dark theme",
            Action::ToggleSidebar => "Toggle sidebar",
            Action::Skip => "Skip tutorial",
            Action::Save => "Save flashcard",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
            Action::Yes => "Yes",
            Action::No => "No",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",

            Action::Confirm | Action::Cancel | Action::Flip => "Selection",

            Action::Quit | Action::Help | Action::ToggleTheme | Action::ToggleSidebar => "Global",

            Action::Skip | Action::Save => "Actions",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",

            Action::Yes | Action::No => "Prompts",
        }
    }

    /// Actions that still apply while a text field has focus.
    ///
    /// Everything else is bound to printable keys in at least one preset and
    /// must reach the field as typed text instead. Even these are ignored in a
    /// field when bound to a plain character.
    pub fn works_in_text_field(&self) -> bool {
        matches!(
            self,
            Action::Confirm
                | Action::Cancel
                | Action::Save
                | Action::Backspace
                | Action::DeleteChar
                | Action::NextTab
                | Action::PrevTab
                | Action::MoveUp
                | Action::MoveDown
        )
    }
}
