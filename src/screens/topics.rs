//! Topic browser for the built-in flashcards.

use super::key_press;
use crate::cards::builtin_topics;
use crate::keymap::{Action, Keymap};
use crate::navigation::PageId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const HEADING: &str = "Choose a topic";

#[derive(Debug)]
pub struct TopicsScreen {
    menu: MenuState,
}

impl Default for TopicsScreen {
    fn default() -> Self {
        Self {
            menu: MenuState::new(builtin_topics().len()),
        }
    }
}

impl TopicsScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for TopicsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let items: Vec<MenuItem> = builtin_topics()
            .iter()
            .map(|topic| {
                let count = topic.cards.len();
                MenuItem::new("📖", topic.name, t.text).info(format!(
                    "{} card{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ))
            })
            .collect();
        let menu = Menu::new(items);

        let column = center_rect(area, 48, menu.height() + 2);
        let [heading, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);
        frame.render_widget(
            Paragraph::new(HEADING)
                .style(t.title_style())
                .alignment(Alignment::Center),
            heading,
        );
        frame.render_stateful_widget(menu, list, &mut self.menu);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.keymap().get_action(key.code, key.modifiers) {
            Some(Action::MoveUp) => self.menu.previous(),
            Some(Action::MoveDown) => self.menu.next(),
            Some(Action::GoToTop) => self.menu.first(),
            Some(Action::GoToEnd) => self.menu.last(),
            Some(Action::Confirm) => {
                if let Some(topic) = builtin_topics().get(self.menu.selected()) {
                    return Ok(ScreenAction::Navigate(PageId::Topic(topic.name)));
                }
            }
            Some(Action::Cancel) => return Ok(ScreenAction::Back),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_navigation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut TopicsScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let mut session = SessionState::default();
        let mut ctx = ScreenContext::new(&config, &mut session, Instant::now());
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        screen.handle_event(event, &mut ctx).unwrap()
    }

    #[test]
    fn test_select_topic() {
        let mut screen = TopicsScreen::new();
        press(&mut screen, KeyCode::Down);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(PageId::Topic("Science"))
        );
        assert_eq!(press(&mut screen, KeyCode::Esc), ScreenAction::Back);
    }
}
