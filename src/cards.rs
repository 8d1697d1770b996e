//! Flashcards, the flip-card toggle and the built-in topic decks.

use serde::Serialize;

/// An immutable question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Which face of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Front,
    Back,
}

/// A flashcard bound to its own front/back toggle.
///
/// Flipping is an instant swap; there is no fade between faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipCard {
    card: Flashcard,
    front_visible: bool,
}

impl FlipCard {
    /// Create a toggle showing the question.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::from_card(Flashcard::new(question, answer))
    }

    pub fn from_card(card: Flashcard) -> Self {
        Self {
            card,
            front_visible: true,
        }
    }

    /// Swap the visible face.
    pub fn flip(&mut self) {
        self.front_visible = !self.front_visible;
    }

    pub fn is_front_visible(&self) -> bool {
        self.front_visible
    }

    pub fn face(&self) -> CardFace {
        if self.front_visible {
            CardFace::Front
        } else {
            CardFace::Back
        }
    }

    /// Text of the visible face.
    pub fn visible_text(&self) -> &str {
        if self.front_visible {
            self.card.question()
        } else {
            self.card.answer()
        }
    }

    pub fn card(&self) -> &Flashcard {
        &self.card
    }
}

/// A built-in topic and its cards.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Topic {
    pub name: &'static str,
    pub cards: &'static [(&'static str, &'static str)],
}

impl Topic {
    /// Fresh flip-card toggles for every card, in order.
    pub fn flip_cards(&self) -> Vec<FlipCard> {
        self.cards
            .iter()
            .map(|(question, answer)| FlipCard::new(*question, *answer))
            .collect()
    }
}

static TOPICS: [Topic; 4] = [
    Topic {
        name: "Mathematics",
        cards: &[
            ("What is the derivative of x²?", "2x"),
            ("What is the value of π to two decimal places?", "3.14"),
        ],
    },
    Topic {
        name: "Science",
        cards: &[
            ("What is the chemical symbol for water?", "H₂O"),
            ("What planet is known as the Red Planet?", "Mars"),
        ],
    },
    Topic {
        name: "History",
        cards: &[("In which year did World War II end?", "1945")],
    },
    Topic {
        name: "Programming",
        cards: &[
            ("What does CPU stand for?", "Central Processing Unit"),
            ("Which data structure works first-in, first-out?", "A queue"),
        ],
    },
];

/// The fixed topic table, in display order.
pub fn builtin_topics() -> &'static [Topic] {
    &TOPICS
}

/// Look up a built-in topic by name.
pub fn find_topic(name: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.name == name)
}
