//! Tutorial page: three steps, then the hub.

use super::key_press;
use crate::keymap::{Action, Keymap};
use crate::navigation::PageId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::tutorial::{Tutorial, TUTORIAL_STEPS};
use crate::utils::center_rect;
use crate::widgets::{Button, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use tracing::debug;

pub const SKIP_LABEL: &str = "Skip Tutorial ⏭️";

#[derive(Debug, Default)]
pub struct TutorialScreen {
    tutorial: Tutorial,
    /// Whether the Skip button has focus instead of Next
    skip_focused: bool,
}

impl TutorialScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    fn advance(&mut self) -> ScreenAction {
        if self.tutorial.next() {
            debug!("Tutorial finished");
            ScreenAction::Navigate(PageId::Hub)
        } else {
            ScreenAction::None
        }
    }

    fn skip(&mut self) -> ScreenAction {
        debug!("Tutorial skipped at step {:?}", self.tutorial.index());
        self.tutorial.skip();
        ScreenAction::Navigate(PageId::Hub)
    }
}

impl Screen for TutorialScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let Some(step) = self.tutorial.current_step() else {
            return Ok(());
        };
        let index = self.tutorial.index().unwrap_or_default();

        let panel = center_rect(area, 64, 14 + BUTTON_HEIGHT);
        let [card, buttons] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)]).areas(panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", step.title))
            .title_bottom(
                Line::styled(
                    format!(" {}/{} ", index + 1, TUTORIAL_STEPS.len()),
                    t.muted_style(),
                )
                .right_aligned(),
            );
        frame.render_widget(
            Paragraph::new(step.body)
                .style(t.text_style())
                .wrap(Wrap { trim: false })
                .block(block.padding(Padding::uniform(1))),
            card,
        );

        let next = Button::new(self.tutorial.next_label()).focused(!self.skip_focused);
        let skip = Button::new(SKIP_LABEL).focused(self.skip_focused);
        let [skip_area, _, next_area] = Layout::horizontal([
            Constraint::Length(skip.width()),
            Constraint::Length(2),
            Constraint::Length(next.width()),
        ])
        .flex(Flex::End)
        .areas(buttons);
        frame.render_widget(skip, skip_area);
        frame.render_widget(next, next_area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = match ctx.keymap().get_action(key.code, key.modifiers) {
            Some(Action::Confirm) if self.skip_focused => self.skip(),
            Some(Action::Confirm) | Some(Action::MoveRight) => self.advance(),
            Some(Action::Skip) => self.skip(),
            Some(Action::NextTab) | Some(Action::PrevTab) => {
                self.skip_focused = !self.skip_focused;
                ScreenAction::None
            }
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn on_enter(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        self.tutorial.restart();
        self.skip_focused = false;
        Ok(())
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_hints(&[
            (Action::Confirm, self.tutorial.next_label()),
            (Action::Skip, "Skip"),
            (Action::NextTab, "Switch"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::SessionState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Instant;

    fn press(screen: &mut TutorialScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let mut session = SessionState::default();
        let mut ctx = ScreenContext::new(&config, &mut session, Instant::now());
        let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        screen.handle_event(event, &mut ctx).unwrap()
    }

    #[test]
    fn test_finishing_goes_to_hub() {
        let mut screen = TutorialScreen::new();
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenAction::None);
        assert!(screen.tutorial().is_last_step());
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(PageId::Hub)
        );
    }

    #[test]
    fn test_skip_button() {
        let mut screen = TutorialScreen::new();
        press(&mut screen, KeyCode::Tab);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Navigate(PageId::Hub)
        );
        assert!(screen.tutorial().is_finished());
    }

    #[test]
    fn test_reentry_restarts() {
        let mut screen = TutorialScreen::new();
        press(&mut screen, KeyCode::Char('s'));

        let config = Config::default();
        let mut session = SessionState::default();
        let mut ctx = ScreenContext::new(&config, &mut session, Instant::now());
        screen.on_enter(&mut ctx).unwrap();
        assert_eq!(screen.tutorial().index(), Some(0));
    }
}
