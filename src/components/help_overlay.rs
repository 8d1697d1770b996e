//! Help Overlay Component
//!
//! Displays current keybindings when the user presses the help key.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_rect;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Lines listing every binding, grouped by action category.
    pub fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut bindings = keymap.all_bindings();
        // Stable sort keeps preset order inside each category
        bindings.sort_by_key(|binding| binding.action.category());

        let mut lines = Vec::new();
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::styled(
                    format!("  {}", category),
                    t.title_style().fg(t.secondary).add_modifier(Modifier::BOLD),
                ));
                current_category = category;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                Span::styled(binding.get_description().to_string(), t.text_style()),
            ]));
        }
        lines
    }

    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_rect(area, 64, area.height.saturating_sub(2));
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        frame.render_widget(Paragraph::new(Self::binding_lines(keymap)), body);
        frame.render_widget(
            Paragraph::new(format!(
                "Edit keybindings in: {}\nPress any key to close",
                config_path
            ))
            .style(t.muted_style())
            .alignment(Alignment::Center),
            footer,
        );
    }
}
