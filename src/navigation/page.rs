//! Page identities.

use std::fmt;

/// Stable identity of a navigable page.
///
/// Topic pages are keyed by the built-in topic name, so each topic is
/// constructed at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    /// Splash screen with the Begin button.
    Start,
    /// "Enter your name" form.
    NameEntry,
    /// "Hi, {name}!" greeting.
    Greeting,
    /// App introduction.
    Welcome,
    /// "New here?" question.
    ReturningUser,
    /// Three-step tutorial.
    Tutorial,
    /// "Welcome back, {name}!" message.
    WelcomeBack,
    /// Main hub with sidebar.
    Hub,
    /// Topic browser.
    Topics,
    /// Flashcards of one built-in topic.
    Topic(&'static str),
    /// Flashcard creation form.
    CreateFlashcard,
    /// Review list of user-created flashcards.
    SavedFlashcards,
}

impl PageId {
    /// Where Cancel/Esc leads from this page, if anywhere.
    pub fn parent(&self) -> Option<PageId> {
        match self {
            PageId::Topics | PageId::CreateFlashcard | PageId::SavedFlashcards => Some(PageId::Hub),
            PageId::Topic(_) => Some(PageId::Topics),
            _ => None,
        }
    }

    /// Human-readable title used in the top bar.
    pub fn title(&self) -> String {
        match self {
            PageId::Start => "Remora".to_string(),
            PageId::NameEntry => "Your Name".to_string(),
            PageId::Greeting => "Hello".to_string(),
            PageId::Welcome => "Welcome".to_string(),
            PageId::ReturningUser => "New Here?".to_string(),
            PageId::Tutorial => "Tutorial".to_string(),
            PageId::WelcomeBack => "Welcome Back".to_string(),
            PageId::Hub => "Home".to_string(),
            PageId::Topics => "Existing Flashcards".to_string(),
            PageId::Topic(name) => (*name).to_string(),
            PageId::CreateFlashcard => "Create Flashcard".to_string(),
            PageId::SavedFlashcards => "Saved Flashcards".to_string(),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Start => write!(f, "start"),
            PageId::NameEntry => write!(f, "name_entry"),
            PageId::Greeting => write!(f, "greeting"),
            PageId::Welcome => write!(f, "welcome"),
            PageId::ReturningUser => write!(f, "returning_user"),
            PageId::Tutorial => write!(f, "tutorial"),
            PageId::WelcomeBack => write!(f, "welcome_back"),
            PageId::Hub => write!(f, "hub"),
            PageId::Topics => write!(f, "topics"),
            PageId::Topic(name) => write!(f, "topic:{}", name),
            PageId::CreateFlashcard => write!(f, "create_flashcard"),
            PageId::SavedFlashcards => write!(f, "saved_flashcards"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_pages() {
        assert_eq!(PageId::Topics.parent(), Some(PageId::Hub));
        assert_eq!(PageId::Topic("History").parent(), Some(PageId::Topics));
        assert_eq!(PageId::Hub.parent(), None);
        assert_eq!(PageId::Greeting.parent(), None);
    }
}
