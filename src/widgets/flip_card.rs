//! Bordered card showing the visible face of a [`FlipCard`].

use crate::cards::{CardFace, FlipCard};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Rows a card takes in a list
pub const CARD_HEIGHT: u16 = 5;

pub struct FlipCardWidget<'a> {
    card: &'a FlipCard,
    selected: bool,
}

impl<'a> FlipCardWidget<'a> {
    pub fn new(card: &'a FlipCard) -> Self {
        Self {
            card,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for FlipCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let label = match self.card.face() {
            CardFace::Front => " Question ",
            CardFace::Back => " Answer ",
        };
        let mut border_style = t.card_style(self.card.is_front_visible());
        if self.selected {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(label);

        Paragraph::new(self.card.visible_text().to_string())
            .block(block)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
