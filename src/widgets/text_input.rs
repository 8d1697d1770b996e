//! Text input widget for rendering [`TextInput`] fields.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A bordered single-line field with title, placeholder and focus styling.
///
/// # Example
/// ```
/// use remora::utils::text_input::TextInput;
/// use remora::widgets::TextInputWidget;
///
/// let input = TextInput::new();
/// let widget = TextInputWidget::new(&input)
///     .title("Question")
///     .placeholder("Type your question...")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn display_text(&self) -> &str {
        match self.input.text() {
            "" => self.placeholder.unwrap_or(""),
            text => text,
        }
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Terminal position of the cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let offset = self.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        Position::new(inner.x + offset, inner.y)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = if self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        };
        Paragraph::new(self.display_text().to_string())
            .block(self.block())
            .style(style)
            .render(area, buf);
    }
}

/// Renders a [`TextInputWidget`] and places the terminal cursor in it when focused.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if focused {
            self.set_cursor_position(cursor);
        }
    }
}
