//! Card-style menu widget.
//!
//! Renders items as 3-line cards with a left accent bar on the selected one.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// Rows taken by each card
pub const ITEM_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub icon: String,
    pub text: String,
    pub color: Color,
    /// Muted text after the label (e.g. "3 cards")
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            color,
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// Selection state with wrap-around movement
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: usize,
    len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + self.len - 1) % self.len;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    /// Whether the selection bar is drawn (menus without focus hide it)
    focused: bool,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height needed to show every item
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * ITEM_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * ITEM_HEIGHT;
            if y + ITEM_HEIGHT > area.y + area.height {
                break;
            }

            let is_selected = self.focused && state.selected == i;
            let bg = if is_selected { t.highlight_bg } else { Color::Reset };
            let style = Style::default().fg(item.color).bg(bg);
            let bar = Span::styled(
                if is_selected { "▌" } else { " " },
                Style::default().fg(t.border_focused).bg(bg),
            );

            let padding = Line::from(vec![
                bar.clone(),
                Span::styled(" ".repeat(area.width.saturating_sub(1) as usize), style),
            ]);
            padding.clone().render(Rect::new(area.x, y, area.width, 1), buf);
            padding.render(Rect::new(area.x, y + 2, area.width, 1), buf);

            let mut spans = vec![
                bar,
                Span::styled(" ", style),
                Span::styled(format!("{} ", item.icon), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    item.text.clone(),
                    if is_selected {
                        style.add_modifier(Modifier::BOLD)
                    } else {
                        style
                    },
                ),
            ];
            if let Some(info) = &item.info {
                spans.push(Span::styled(
                    format!(" ({})", info),
                    Style::default().fg(t.text_muted).bg(bg),
                ));
            }
            let line = Line::from(spans);
            let used = line.width();
            let mut spans = line.spans;
            if used < area.width as usize {
                spans.push(Span::styled(" ".repeat(area.width as usize - used), style));
            }
            Line::from(spans).render(Rect::new(area.x, y + 1, area.width, 1), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_state_wraps() {
        let mut state = MenuState::new(3);
        state.previous();
        assert_eq!(state.selected(), 2);
        state.next();
        assert_eq!(state.selected(), 0);
        state.last();
        assert_eq!(state.selected(), 2);
        state.select(7);
        assert_eq!(state.selected(), 2);
    }

    #[test]
    fn test_empty_menu_state() {
        let mut state = MenuState::new(0);
        state.next();
        state.previous();
        assert_eq!(state.selected(), 0);
        assert!(state.is_empty());
    }

    #[test]
    fn test_menu_renders_items() {
        let menu = Menu::new(vec![
            MenuItem::new("📚", "Existing", Color::Cyan).info("4 topics"),
            MenuItem::new("✏️", "Create", Color::Green),
        ]);
        assert_eq!(menu.height(), 6);

        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        let mut state = MenuState::new(2);
        menu.render(area, &mut buf, &mut state);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Existing"));
        assert!(text.contains("4 topics"));
        assert!(text.contains("Create"));
        assert_eq!(buf[(0, 1)].symbol(), "▌");
    }
}
