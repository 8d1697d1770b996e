//! Dialog widget for blocking notices
//!
//! Handles centering, background dimming, borders, and content rendering.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    Success,
    Error,
}

/// A centered modal with a title, wrapped content and an optional footer line.
pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub footer: Option<&'a str>,
    pub variant: DialogVariant,
    /// Width in columns before clamping to the area
    pub width: u16,
    /// Whether to dim the page behind the dialog
    pub dim_background: bool,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            footer: None,
            variant: DialogVariant::Default,
            width: 56,
            dim_background: true,
        }
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn width(mut self, columns: u16) -> Self {
        self.width = columns;
        self
    }

    pub fn dim_background(mut self, dim: bool) -> Self {
        self.dim_background = dim;
        self
    }

    /// Where the dialog lands inside `area`.
    pub fn popup_area(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width.saturating_sub(4)).max(1);
        let inner_width = width.saturating_sub(6).max(1) as usize;
        let content_lines: usize = self
            .content
            .lines()
            .map(|line| line.chars().count().div_ceil(inner_width).max(1))
            .sum();
        let footer_lines = if self.footer.is_some() { 2 } else { 0 };
        // borders + blank line under the title
        let height = (content_lines + footer_lines + 3) as u16;
        let height = height.min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();

        if self.dim_background {
            buf.set_style(area, t.dim_style());
        }

        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_focused_style(),
            DialogVariant::Success => t.success_style(),
            DialogVariant::Error => t.error_style(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(format!(" {} ", self.title)).style(t.title_style()))
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = self
            .content
            .lines()
            .map(|line| Line::styled(line.to_string(), t.text_style()))
            .collect();
        if let Some(footer) = self.footer {
            lines.push(Line::default());
            lines.push(Line::styled(footer.to_string(), t.muted_style()).alignment(Alignment::Center));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
