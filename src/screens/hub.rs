//! Home hub: three entry cards plus the collapsible sidebar.

use super::key_press;
use crate::components::Sidebar;
use crate::keymap::{Action, Keymap};
use crate::navigation::PageId;
use crate::onboarding::FALLBACK_NAME;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::center_rect;
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::{Duration, Instant};

/// Hub cards: icon, label, description, target.
const HUB_CARDS: [(&str, &str, &str, PageId); 3] = [
    ("📚", "Existing Flashcards", "Study ready-made topics", PageId::Topics),
    ("✏️", "Create Flashcard", "Write your own question", PageId::CreateFlashcard),
    ("💾", "Saved Flashcards", "Review what you wrote", PageId::SavedFlashcards),
];

#[derive(Debug)]
pub struct HubScreen {
    menu: MenuState,
    sidebar: Sidebar,
    sidebar_focused: bool,
}

impl HubScreen {
    pub fn new(sidebar_duration: Duration, now: Instant) -> Self {
        Self {
            menu: MenuState::new(HUB_CARDS.len()),
            sidebar: Sidebar::new(sidebar_duration, now),
            sidebar_focused: false,
        }
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn is_sidebar_focused(&self) -> bool {
        self.sidebar_focused
    }

    fn selected_target(&self) -> PageId {
        if self.sidebar_focused {
            self.sidebar.selected_target()
        } else {
            HUB_CARDS[self.menu.selected()].3
        }
    }

    fn focused_menu(&mut self) -> &mut MenuState {
        if self.sidebar_focused {
            &mut self.sidebar.menu
        } else {
            &mut self.menu
        }
    }

    fn toggle_sidebar(&mut self, now: Instant) {
        self.sidebar.toggle(now);
        if !self.sidebar.is_expanded() {
            self.sidebar_focused = false;
        }
    }
}

impl Screen for HubScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let width = self.sidebar.width(ctx.now).min(area.width);
        let [side, main] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        if width > 0 {
            self.sidebar.render(frame, side, self.sidebar_focused);
        }

        let items: Vec<MenuItem> = HUB_CARDS
            .iter()
            .map(|(icon, label, info, _)| MenuItem::new(*icon, *label, t.text).info(*info))
            .collect();
        let menu = Menu::new(items).focused(!self.sidebar_focused);

        let column = center_rect(main, 56, menu.height() + 2);
        let [heading, _, cards] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        let name = ctx.session.username().unwrap_or(FALLBACK_NAME);
        frame.render_widget(
            Paragraph::new(format!("What would you like to do, {}?", name))
                .style(t.title_style())
                .alignment(Alignment::Center),
            heading,
        );
        frame.render_stateful_widget(menu, cards, &mut self.menu);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let Some(action) = ctx.keymap().get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveUp => self.focused_menu().previous(),
            Action::MoveDown => self.focused_menu().next(),
            Action::GoToTop => self.focused_menu().first(),
            Action::GoToEnd => self.focused_menu().last(),
            Action::ToggleSidebar => self.toggle_sidebar(ctx.now),
            Action::NextTab | Action::PrevTab if self.sidebar.is_expanded() => {
                self.sidebar_focused = !self.sidebar_focused;
            }
            Action::Cancel if self.sidebar_focused => self.sidebar_focused = false,
            Action::Confirm => return Ok(ScreenAction::Navigate(self.selected_target())),
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.sidebar.is_animating(now)
    }

    fn footer_hints(&self, keymap: &Keymap) -> String {
        let mut entries = vec![(Action::Confirm, "Open"), (Action::ToggleSidebar, "Menu")];
        if self.sidebar.is_expanded() {
            entries.push((Action::NextTab, "Focus Menu"));
        }
        entries.push((Action::ToggleTheme, "Theme"));
        entries.push((Action::Quit, "Quit"));
        format!(
            "{}/{}: Navigate | {}",
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.footer_hints(&entries)
        )
    }
}
