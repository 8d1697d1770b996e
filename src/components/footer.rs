use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One-line footer of key hints
pub struct Footer;

impl Footer {
    /// Render `"Key: Label | Key: Label"` with keys highlighted.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        frame.render_widget(Self::line(text), area);
    }

    fn line(text: &str) -> Paragraph<'static> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", keys), t.emphasis_style()));
                spans.push(Span::styled(label.to_string(), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}
