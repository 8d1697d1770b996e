//! "Enter your name" form.

use super::{edit_text, key_press};
use crate::keymap::{Action, Keymap};
use crate::onboarding::submit_name;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_rect, TextInput};
use crate::widgets::{TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::debug;

pub const PROMPT: &str = "ENTER YOUR NAME";
pub const PLACEHOLDER: &str = "Type it here...";

#[derive(Debug, Default)]
pub struct NameEntryScreen {
    input: TextInput,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }
}

impl Screen for NameEntryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let column = center_rect(area, 44, 5);
        let [label, _, field] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(PROMPT)
                .style(theme().title_style())
                .alignment(Alignment::Center),
            label,
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.input)
                .placeholder(PLACEHOLDER)
                .focused(true),
            field,
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        match edit_text(&mut self.input, key, ctx.keymap()) {
            Some(Action::Confirm) => match submit_name(self.input.text(), ctx.session) {
                Ok(next) => Ok(ScreenAction::Navigate(next)),
                Err(err) => {
                    debug!("Rejected name: {}", err);
                    Ok(ScreenAction::error_notice(err.title(), err.to_string()))
                }
            },
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_hints(&[(Action::Confirm, "Continue")])
    }
}
