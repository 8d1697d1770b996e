//! Domain errors.
//!
//! Plumbing code (terminal, config files) uses `anyhow`; the errors here are
//! the ones callers are expected to match on.

use crate::navigation::PageId;
use thiserror::Error;

/// User-input validation failures.
///
/// Both variants are recovered locally: the form shows a blocking notice and
/// keeps focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name field was blank after trimming.
    #[error("Please enter your name before continuing.")]
    EmptyName,
    /// The question or the answer was blank after trimming.
    #[error("Both the question and the answer are required.")]
    IncompleteFlashcard,
}

impl ValidationError {
    /// Title used for the notice dialog.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "Name Required",
            ValidationError::IncompleteFlashcard => "Incomplete Flashcard",
        }
    }
}

/// Page registry and navigation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Two pages were registered under the same identity.
    #[error("page {0} is already registered")]
    DuplicateId(PageId),
    /// A page was requested that was never registered.
    #[error("page {0} is not registered")]
    UnknownPage(PageId),
}
