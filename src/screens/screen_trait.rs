//! Screen trait and associated types.
//!
//! Every page the navigator shows is a [`Screen`]. Screens own their widget
//! state, read shared data through a context object and report what should
//! happen next as a [`ScreenAction`] instead of touching the app directly.

use crate::config::Config;
use crate::keymap::Keymap;
use crate::navigation::PageId;
use crate::session::SessionState;
use crate::widgets::DialogVariant;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Session data (user name, theme, custom flashcards).
    pub session: &'a SessionState,
    /// Frame time; animations are sampled at this instant.
    pub now: Instant,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, session: &'a SessionState, now: Instant) -> Self {
        Self {
            config,
            session,
            now,
        }
    }
}

/// Context provided for handling events.
///
/// The session is the only shared state a screen may change.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Session data.
    pub session: &'a mut SessionState,
    /// Time the event was received.
    pub now: Instant,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, session: &'a mut SessionState, now: Instant) -> Self {
        Self {
            config,
            session,
            now,
        }
    }

    /// Shorthand for the configured keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a different page.
    Navigate(PageId),
    /// Go to the parent page, if the current page has one.
    Back,
    /// Show a blocking notice.
    ShowNotice {
        title: String,
        content: String,
        variant: DialogVariant,
    },
    /// Flip between light and dark theme.
    ToggleTheme,
    /// Open help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

impl ScreenAction {
    /// Notice for a failed validation.
    pub fn error_notice(title: &str, content: impl Into<String>) -> Self {
        Self::ShowNotice {
            title: title.to_string(),
            content: content.into(),
            variant: DialogVariant::Error,
        }
    }
}

/// Trait for page controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen;
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::Navigate(PageId::Hub))
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen within `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, global single-key bindings are disabled so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called each time the page becomes current.
    fn on_enter(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Whether the screen runs its own animation at `now`.
    fn is_animating(&self, _now: Instant) -> bool {
        false
    }

    /// Key hints shown in the footer.
    fn footer_hints(&self, keymap: &Keymap) -> String {
        keymap.footer_navigation()
    }
}
