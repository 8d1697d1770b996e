//! Toast notification widget.
//!
//! A non-blocking notification in the corner of the screen that expires on
//! its own. Expiry is checked against the loop clock like every other timer.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(2);

const ICON: &str = "\u{2139}"; // ℹ

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + DEFAULT_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Renders a toast in the top-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        let wanted = self.toast.message.chars().count() as u16 + 6;
        let width = wanted.min(area.width.saturating_sub(2));
        let height = 3u16.min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        // Below the top bar
        let y = area.y + 1.min(area.height.saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();

        Clear.render(toast_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(t.primary));

        Paragraph::new(format!("{} {}", ICON, self.toast.message))
            .block(block)
            .style(Style::default().fg(t.text).add_modifier(Modifier::BOLD))
            .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new one replaces the old.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.push(Toast::new(message, now));
    }

    /// Drop an expired toast. Returns whether one is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|toast| toast.expires_at)
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}
