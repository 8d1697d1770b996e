//! Timed onboarding messages: greeting, welcome and welcome back.
//!
//! These pages take no input of their own; the app schedules their
//! auto-advance when they become current.

use crate::keymap::Keymap;
use crate::onboarding::{greeting_text, welcome_back_text, FALLBACK_NAME};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub const WELCOME_TITLE: &str = "WELCOME!";
pub const WELCOME_TAGLINE: &str = "Remora is a flashcard for students";

/// Which message the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    Welcome,
    WelcomeBack,
}

#[derive(Debug)]
pub struct MessageScreen {
    kind: MessageKind,
}

impl MessageScreen {
    pub fn new(kind: MessageKind) -> Self {
        Self { kind }
    }

    /// Headline and optional second line for the current session.
    pub fn lines(&self, ctx: &RenderContext) -> (String, Option<&'static str>) {
        match self.kind {
            MessageKind::Greeting => (
                greeting_text(ctx.session.username().unwrap_or(FALLBACK_NAME)),
                None,
            ),
            MessageKind::Welcome => (WELCOME_TITLE.to_string(), Some(WELCOME_TAGLINE)),
            MessageKind::WelcomeBack => (welcome_back_text(ctx.session), None),
        }
    }
}

impl Screen for MessageScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (headline, detail) = self.lines(ctx);

        let mut text = vec![Line::styled(headline, t.title_style())];
        if let Some(detail) = detail {
            text.push(Line::default());
            text.push(Line::styled(detail, t.text_style()));
        }
        let height = text.len() as u16;
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            center_rect(area, area.width.saturating_sub(4), height),
        );
        Ok(())
    }

    fn handle_event(&mut self, _event: Event, _ctx: &mut ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    fn footer_hints(&self, _keymap: &Keymap) -> String {
        String::new()
    }
}
