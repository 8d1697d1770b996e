//! Collapsible hub sidebar.
//!
//! Collapsed by default. Toggling animates the column count between zero
//! and [`EXPANDED_WIDTH`].

use crate::animation::Tween;
use crate::navigation::PageId;
use crate::styles::theme;
use crate::widgets::{Menu, MenuItem, MenuState};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use std::time::{Duration, Instant};
use tracing::debug;

pub const EXPANDED_WIDTH: u16 = 26;

/// Sidebar entries and where they lead
pub const SIDEBAR_ITEMS: [(&str, &str, PageId); 4] = [
    ("🏠", "Home", PageId::Hub),
    ("📚", "Existing Flashcards", PageId::Topics),
    ("✏️", "Create Flashcard", PageId::CreateFlashcard),
    ("💾", "Saved Flashcards", PageId::SavedFlashcards),
];

#[derive(Debug)]
pub struct Sidebar {
    expanded: bool,
    width: Tween,
    duration: Duration,
    pub menu: MenuState,
}

impl Sidebar {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            expanded: false,
            width: Tween::new(0.0, 0.0, now, Duration::ZERO),
            duration,
            menu: MenuState::new(SIDEBAR_ITEMS.len()),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Start animating toward the other state, from the current width.
    pub fn toggle(&mut self, now: Instant) {
        let from = self.width.value_at(now);
        self.expanded = !self.expanded;
        let to = if self.expanded {
            f32::from(EXPANDED_WIDTH)
        } else {
            0.0
        };
        self.width = Tween::new(from, to, now, self.duration);
        debug!("Sidebar {}", if self.expanded { "expanding" } else { "collapsing" });
    }

    /// Width in columns at `now`.
    pub fn width(&self, now: Instant) -> u16 {
        self.width.value_at(now).round() as u16
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.width.is_finished(now)
    }

    /// Page behind the highlighted entry
    pub fn selected_target(&self) -> PageId {
        SIDEBAR_ITEMS[self.menu.selected()].2
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(if focused {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Labels only once there is room for them
        if inner.width + 1 < EXPANDED_WIDTH {
            return;
        }
        let items = SIDEBAR_ITEMS
            .iter()
            .map(|(icon, label, _)| MenuItem::new(*icon, *label, t.text))
            .collect();
        frame.render_stateful_widget(Menu::new(items).focused(focused), inner, &mut self.menu);
    }
}
