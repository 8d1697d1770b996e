//! Splash screen with the Begin button.

use super::key_press;
use crate::keymap::{Action, Keymap};
use crate::navigation::PageId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Button, RemoraLogo, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const SUBTITLE: &str = "READY WHEN YOU ARE!";
pub const BEGIN_LABEL: &str = "BEGIN";

#[derive(Debug, Default)]
pub struct StartScreen;

impl StartScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for StartScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let column = center_rect(area, 40, RemoraLogo::HEIGHT + BUTTON_HEIGHT + 4);
        let [logo, _, subtitle, _, button] = Layout::vertical([
            Constraint::Length(RemoraLogo::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(column);

        frame.render_widget(RemoraLogo, logo);
        frame.render_widget(
            Paragraph::new(SUBTITLE)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            subtitle,
        );
        let begin = Button::new(BEGIN_LABEL).focused(true);
        let width = begin.width();
        frame.render_widget(begin, center_rect(button, width, BUTTON_HEIGHT));
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match ctx.keymap().get_action(key.code, key.modifiers) {
            Some(Action::Confirm) => Ok(ScreenAction::Navigate(PageId::NameEntry)),
            Some(Action::Cancel) => Ok(ScreenAction::Quit),
            _ => Ok(ScreenAction::None),
        }
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_hints(&[
            (Action::Confirm, "Begin"),
            (Action::Help, "Help"),
            (Action::Quit, "Quit"),
        ])
    }
}
