//! Flashcards of one built-in topic.

use super::key_press;
use crate::cards::Topic;
use crate::components::CardList;
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Card faces persist while the page stays constructed.
#[derive(Debug)]
pub struct TopicScreen {
    topic: &'static Topic,
    cards: CardList,
}

impl TopicScreen {
    pub fn new(topic: &'static Topic) -> Self {
        Self {
            topic,
            cards: CardList::new(topic.flip_cards()),
        }
    }

    pub fn cards(&self) -> &CardList {
        &self.cards
    }
}

impl Screen for TopicScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let [heading, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .margin(1)
        .areas(area);

        frame.render_widget(
            Paragraph::new(format!("{} Flashcards", self.topic.name))
                .style(theme().title_style())
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
            Some(action) => {
                self.cards.handle_action(action);
                Ok(ScreenAction::None)
            }
            None => Ok(ScreenAction::None),
        }
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        format!(
            "{}/{}: Select | {}",
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.footer_hints(&[(Action::Flip, "Flip"), (Action::Cancel, "Back")])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::find_topic;
    use crate::config::Config;
    use crate::session::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut TopicScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let mut session = SessionState::default();
        let mut ctx = ScreenContext::new(&config, &mut session, Instant::now());
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        screen.handle_event(event, &mut ctx).unwrap()
    }

    #[test]
    fn test_flip_and_back() {
        let mut screen = TopicScreen::new(find_topic("Mathematics").unwrap());
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.cards().cards()[0].visible_text(), "2x");
        press(&mut screen, KeyCode::Char(' '));
        assert!(screen.cards().cards()[0].is_front_visible());
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenAction::Back);
    }
}
