use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows a button takes
pub const BUTTON_HEIGHT: u16 = 3;

/// A bordered push button. Focused buttons get the highlight colors.
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns needed for the label plus border and padding
    pub fn width(&self) -> u16 {
        Line::raw(self.label).width() as u16 + 6
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let (border, label) = if self.focused {
            (t.border_focused_style(), t.highlight_style())
        } else {
            (t.border_style(), t.text_style())
        };
        Paragraph::new(Span::styled(self.label, label))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_renders_label() {
        let button = Button::new("BEGIN");
        assert_eq!(button.width(), 11);
        let area = Rect::new(0, 0, 11, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        button.focused(true).render(area, &mut buf);
        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("BEGIN"));
    }
}
