//! Page controllers.
//!
//! Every page the navigator holds is a boxed [`Screen`]. Each screen owns its
//! widget state and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                                │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │        Navigator<Box<dyn Screen>>               │    │
//! │  │  current page ─► handle_event(event, ctx)      │    │
//! │  │               ◄─ ScreenAction                   │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                      │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  │  - on_enter(context)                           │    │
//! │  │  - is_input_focused() -> bool                  │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod create_flashcard;
pub mod hub;
pub mod message;
pub mod name_entry;
pub mod returning_user;
pub mod saved_flashcards;
pub mod screen_trait;
pub mod start;
pub mod topic;
pub mod topics;
pub mod tutorial;

pub use create_flashcard::CreateFlashcardScreen;
pub use hub::HubScreen;
pub use message::{MessageKind, MessageScreen};
pub use name_entry::NameEntryScreen;
pub use returning_user::ReturningUserScreen;
pub use saved_flashcards::SavedFlashcardsScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use start::StartScreen;
pub use topic::TopicScreen;
pub use topics::TopicsScreen;
pub use tutorial::TutorialScreen;

use crate::keymap::{Action, Keymap};
use crate::utils::TextInput;
use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};

/// The key of a press event. Releases and repeats are ignored.
pub(crate) fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Feed a key to a text field.
///
/// Editing keys are applied to `input`. Returns the text-field action the
/// field did not consume (Confirm, Save, Tab...) for the screen to handle.
pub(crate) fn edit_text(input: &mut TextInput, key: KeyEvent, keymap: &Keymap) -> Option<Action> {
    if let Some(action) = keymap.get_text_field_action(key.code, key.modifiers) {
        if input.handle_action(action) {
            return None;
        }
        return Some(action);
    }
    if !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        input.handle_key(key.code);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_edit_text_types_letters_bound_elsewhere() {
        let keymap = Keymap::default();
        let mut input = TextInput::new();
        for c in ['q', 't', 'y', '?'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(edit_text(&mut input, key, &keymap), None);
        }
        assert_eq!(input.text(), "qty?");

        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(edit_text(&mut input, backspace, &keymap), None);
        assert_eq!(input.text(), "qty");

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(edit_text(&mut input, enter, &keymap), Some(Action::Confirm));
    }

    #[test]
    fn test_edit_text_ignores_control_chords() {
        let keymap = Keymap::default();
        let mut input = TextInput::new();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(edit_text(&mut input, key, &keymap), None);
        assert!(input.text().is_empty());
    }
}
