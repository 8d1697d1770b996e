use crate::styles::{theme, ThemeType};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Title on the left, theme button glyph on the right
pub struct TopBar;

impl TopBar {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, theme_type: ThemeType) {
        let t = theme();
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(8)]).areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Remora", t.title_style()),
                Span::styled(format!(" · {}", title), t.muted_style()),
            ])),
            left,
        );
        frame.render_widget(
            Paragraph::new(format!("[{}] ", theme_type.glyph())).alignment(Alignment::Right),
            right,
        );
    }
}
