//! Three-step tutorial cursor.

/// A tutorial step: title and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TUTORIAL_STEPS: [TutorialStep; 3] = [
    TutorialStep {
        title: "Adding Flashcards",
        body: "Choose 'Create Flashcard' on the home page to make a new flashcard.\n\
               Enter a question and an answer, and save it instantly.",
    },
    TutorialStep {
        title: "Navigating the App",
        body: "Use the sidebar ☰ to explore:\n\
               🏠 Home – Start here\n\
               📚 Existing Flashcards – Study ready-made topics\n\
               ✏️ Create Flashcard – Write your own\n\
               💾 Saved Flashcards – Review what you wrote",
    },
    TutorialStep {
        title: "Using Existing Flashcards",
        body: "Select any topic to study. Flip a card to see the answer, \
               then flip it back to try again.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Step(usize),
    Finished,
}

/// Progress through [`TUTORIAL_STEPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    cursor: Cursor,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::start()
    }
}

impl Tutorial {
    /// Always begins at the first step.
    pub fn start() -> Self {
        Self {
            cursor: Cursor::Step(0),
        }
    }

    /// Go back to the first step.
    pub fn restart(&mut self) {
        self.cursor = Cursor::Step(0);
    }

    /// Advance one step. Returns true once the tutorial is finished.
    pub fn next(&mut self) -> bool {
        self.cursor = match self.cursor {
            Cursor::Step(n) if n + 1 < TUTORIAL_STEPS.len() => Cursor::Step(n + 1),
            _ => Cursor::Finished,
        };
        self.is_finished()
    }

    /// Abandon the remaining steps.
    pub fn skip(&mut self) {
        self.cursor = Cursor::Finished;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == Cursor::Finished
    }

    /// Zero-based index of the showing step.
    pub fn index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::Step(n) => Some(n),
            Cursor::Finished => None,
        }
    }

    pub fn current_step(&self) -> Option<&'static TutorialStep> {
        self.index().map(|n| &TUTORIAL_STEPS[n])
    }

    pub fn is_last_step(&self) -> bool {
        self.index() == Some(TUTORIAL_STEPS.len() - 1)
    }

    /// Label for the advance button.
    pub fn next_label(&self) -> &'static str {
        if self.is_last_step() {
            "Finish ✅"
        } else {
            "Next ➜"
        }
    }
}
