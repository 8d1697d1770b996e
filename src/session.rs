//! In-memory session state.
//!
//! Lives for the process only; nothing here is written to disk.

use crate::cards::Flashcard;
use crate::error::ValidationError;
use crate::styles::ThemeType;
use tracing::info;

/// State shared by every page for the lifetime of the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    username: Option<String>,
    theme: ThemeType,
    custom_flashcards: Vec<Flashcard>,
}

impl SessionState {
    pub fn new(theme: ThemeType) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Record the user's name, trimmed. Blank names are rejected.
    pub fn set_username(&mut self, name: &str) -> Result<&str, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        info!("Session user set");
        Ok(self.username.insert(name.to_string()).as_str())
    }

    pub fn theme(&self) -> ThemeType {
        self.theme
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> ThemeType {
        self.theme = self.theme.toggled();
        info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }

    /// User-created flashcards in creation order.
    pub fn custom_flashcards(&self) -> &[Flashcard] {
        &self.custom_flashcards
    }

    /// Append a flashcard. Both sides are trimmed and must be non-empty.
    pub fn add_flashcard(&mut self, question: &str, answer: &str) -> Result<&Flashcard, ValidationError> {
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() || answer.is_empty() {
            return Err(ValidationError::IncompleteFlashcard);
        }
        self.custom_flashcards.push(Flashcard::new(question, answer));
        info!("Saved flashcard #{}", self.custom_flashcards.len());
        Ok(&self.custom_flashcards[self.custom_flashcards.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = SessionState::default();
        assert_eq!(session.username(), None);
        assert_eq!(session.theme(), ThemeType::Light);
        assert!(session.custom_flashcards().is_empty());
    }

    #[test]
    fn test_username_is_trimmed() {
        let mut session = SessionState::default();
        assert_eq!(session.set_username("  Ada  "), Ok("Ada"));
        assert_eq!(session.username(), Some("Ada"));
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let mut session = SessionState::default();
        assert_eq!(session.set_username(" \t "), Err(ValidationError::EmptyName));
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_theme_double_toggle_round_trips() {
        let mut session = SessionState::new(ThemeType::Light);
        assert_eq!(session.toggle_theme(), ThemeType::Dark);
        assert_eq!(session.toggle_theme(), ThemeType::Light);
    }

    #[test]
    fn test_incomplete_flashcard_leaves_state_unchanged() {
        let mut session = SessionState::default();
        assert_eq!(
            session.add_flashcard("What?", "   ").map(|_| ()),
            Err(ValidationError::IncompleteFlashcard)
        );
        assert_eq!(
            session.add_flashcard("", "Answer").map(|_| ()),
            Err(ValidationError::IncompleteFlashcard)
        );
        assert!(session.custom_flashcards().is_empty());
    }

    #[test]
    fn test_flashcards_keep_insertion_order() {
        let mut session = SessionState::default();
        session.add_flashcard(" Q1 ", " A1 ").unwrap();
        session.add_flashcard("Q2", "A2").unwrap();
        let questions: Vec<_> = session
            .custom_flashcards()
            .iter()
            .map(Flashcard::question)
            .collect();
        assert_eq!(questions, vec!["Q1", "Q2"]);
        assert_eq!(session.custom_flashcards()[0].answer(), "A1");
    }
}
