//! "New here?" question.

use super::key_press;
use crate::keymap::{Action, Keymap};
use crate::onboarding::returning_user_choice;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Button, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const QUESTION: &str = "New here?";

#[derive(Debug)]
pub struct ReturningUserScreen {
    /// Whether "Yes" is highlighted
    yes_selected: bool,
}

impl Default for ReturningUserScreen {
    fn default() -> Self {
        Self { yes_selected: true }
    }
}

impl ReturningUserScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yes_selected(&self) -> bool {
        self.yes_selected
    }
}

impl Screen for ReturningUserScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let column = center_rect(area, 30, BUTTON_HEIGHT + 2);
        let [question, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(QUESTION)
                .style(theme().title_style())
                .alignment(Alignment::Center),
            question,
        );
        let [yes, _, no] = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .flex(Flex::Center)
        .areas(buttons);
        frame.render_widget(Button::new("Yes").focused(self.yes_selected), yes);
        frame.render_widget(Button::new("No").focused(!self.yes_selected), no);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let Some(action) = ctx.keymap().get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveLeft | Action::MoveRight | Action::NextTab | Action::PrevTab => {
                self.yes_selected = !self.yes_selected;
            }
            Action::Yes => return Ok(ScreenAction::Navigate(returning_user_choice(true))),
            Action::No => return Ok(ScreenAction::Navigate(returning_user_choice(false))),
            Action::Confirm => {
                return Ok(ScreenAction::Navigate(returning_user_choice(self.yes_selected)))
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_hints(&[
            (Action::Yes, "Yes"),
            (Action::No, "No"),
            (Action::MoveRight, "Switch"),
            (Action::Confirm, "Select"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::PageId;
    use crate::session::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut ReturningUserScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let mut session = SessionState::default();
        let mut ctx = ScreenContext::new(&config, &mut session, Instant::now());
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        screen.handle_event(event, &mut ctx).unwrap()
    }

    #[test]
    fn test_shortcut_keys() {
        let mut screen = ReturningUserScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Char('y')),
            ScreenAction::Navigate(PageId::Tutorial)
        );
        assert_eq!(
            press(&mut screen, KeyCode::Char('n')),
            ScreenAction::Navigate(PageId::WelcomeBack)
        );
    }

    #[test]
    fn test_confirm_uses_selection() {
        let mut screen = ReturningUserScreen::new();
        press(&mut screen, KeyCode::Right);
        assert!(!screen.yes_selected());
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(PageId::WelcomeBack)
        );
    }
}
