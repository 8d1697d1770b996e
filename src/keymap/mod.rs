//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset.
    ///
    /// If an action is overridden, preset bindings for that action are ignored.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Like [`get_action`](Self::get_action), limited to actions that apply
    /// while typing into a text field.
    ///
    /// Bindings on plain characters (vim's `j`, `k`, `x`) are skipped so the
    /// character is typed instead.
    pub fn get_text_field_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .filter(|binding| binding.action.works_in_text_field())
            .filter_map(|binding| binding.parse().ok().map(|parsed| (parsed, binding.action)))
            .find(|(parsed, _)| !parsed.is_printable() && parsed.matches(code, modifiers))
            .map(|(_, action)| action)
    }

    /// Get all bindings (overrides + preset) for display in help.
    /// Overrides shadow preset bindings for the same action.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Override keys that do not parse, for reporting at startup.
    pub fn invalid_overrides(&self) -> Vec<String> {
        self.overrides
            .iter()
            .filter_map(|binding| binding.parse().err())
            .collect()
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q").
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.action == action)
            .map_or_else(|| format!("{:?}", action), |binding| binding.display())
    }

    /// Key hints for the footer, e.g. `"↑/↓: Navigate | Enter: Select | Esc: Back"`.
    pub fn footer_hints(&self, entries: &[(Action, &str)]) -> String {
        entries
            .iter()
            .map(|(action, label)| format!("{}: {}", self.get_key_display_for_action(*action), label))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Footer for list screens
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}/{}: Navigate | {}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown),
            self.footer_hints(&[
                (Action::Confirm, "Select"),
                (Action::Cancel, "Back"),
                (Action::Help, "Help"),
            ])
        )
    }
}
