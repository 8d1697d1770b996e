//! Scrollable column of flip cards with one selected card.

use crate::cards::FlipCard;
use crate::keymap::Action;
use crate::widgets::{FlipCardWidget, CARD_HEIGHT};
use ratatui::prelude::*;

#[derive(Debug, Default)]
pub struct CardList {
    cards: Vec<FlipCard>,
    selected: usize,
    /// First visible card
    offset: usize,
}

impl CardList {
    pub fn new(cards: Vec<FlipCard>) -> Self {
        Self {
            cards,
            selected: 0,
            offset: 0,
        }
    }

    /// Replace the cards and reset the selection.
    pub fn set_cards(&mut self, cards: Vec<FlipCard>) {
        *self = Self::new(cards);
    }

    pub fn cards(&self) -> &[FlipCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.cards.is_empty()).then_some(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flip the selected card. Returns false when there is nothing to flip.
    pub fn flip_selected(&mut self) -> bool {
        match self.cards.get_mut(self.selected) {
            Some(card) => {
                card.flip();
                true
            }
            None => false,
        }
    }

    /// Apply a list action. Returns true if handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveUp => self.select_previous(),
            Action::MoveDown => self.select_next(),
            Action::GoToTop => self.selected = 0,
            Action::GoToEnd => self.selected = self.cards.len().saturating_sub(1),
            Action::Flip | Action::Confirm => return self.flip_selected(),
            _ => return false,
        }
        true
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let visible = usize::from((area.height / CARD_HEIGHT).max(1));
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }

        for (row, (index, card)) in self
            .cards
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .enumerate()
        {
            let y = area.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            frame.render_widget(
                FlipCardWidget::new(card).selected(index == self.selected),
                Rect::new(area.x, y, area.width, height),
            );
        }
    }
}
