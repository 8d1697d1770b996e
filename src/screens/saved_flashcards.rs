//! Review list of the flashcards created this session.

use super::key_press;
use crate::cards::FlipCard;
use crate::components::CardList;
use crate::keymap::{Action, Keymap};
use crate::navigation::PageId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use tracing::debug;

pub const EMPTY_TEXT: &str = "No saved flashcards yet. Create one from the home page.";

#[derive(Debug, Default)]
pub struct SavedFlashcardsScreen {
    cards: CardList,
}

impl SavedFlashcardsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &CardList {
        &self.cards
    }
}

impl Screen for SavedFlashcardsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        if self.cards.is_empty() {
            frame.render_widget(
                Paragraph::new(EMPTY_TEXT)
                    .style(t.muted_style())
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                center_rect(area, 40, 2),
            );
            return Ok(());
        }

        let [heading, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .margin(1)
        .areas(area);
        frame.render_widget(
            Paragraph::new(format!("Your Flashcards ({})", self.cards.cards().len()))
                .style(t.title_style())
                .alignment(Alignment::Center),
            heading,
        );
        self.cards.render(frame, list);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.keymap().get_action(key.code, key.modifiers) {
            Some(Action::Cancel) => Ok(ScreenAction::Back),
            Some(Action::Confirm) if self.cards.is_empty() => {
                Ok(ScreenAction::Navigate(PageId::CreateFlashcard))
            }
            Some(action) => {
                self.cards.handle_action(action);
                Ok(ScreenAction::None)
            }
            None => Ok(ScreenAction::None),
        }
    }

    /// Rebuild the list from the session, front side up.
    fn on_enter(&mut self, ctx: &mut ScreenContext) -> Result<()> {
        let cards: Vec<FlipCard> = ctx
            .session
            .custom_flashcards()
            .iter()
            .cloned()
            .map(FlipCard::from_card)
            .collect();
        debug!("Showing {} saved flashcards", cards.len());
        self.cards.set_cards(cards);
        Ok(())
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        if self.cards.is_empty() {
            return keymap.footer_hints(&[(Action::Confirm, "Create"), (Action::Cancel, "Back")]);
        }
        format!(
            "{}/{}: Select | {}",
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.footer_hints(&[(Action::Flip, "Flip"), (Action::Cancel, "Back")])
        )
    }
}
