//! Theme and style system for Remora
//!
//! The session theme is mirrored into a process-wide palette so every page
//! picks up a toggle on its next frame without being told about it.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Light,
    primary: Color::Blue,
    secondary: Color::Magenta,
    success: Color::Green,
    error: Color::Red,
    text: Color::Black,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Blue,
    border: Color::DarkGray,
    border_focused: Color::Blue,
    highlight_bg: Color::Gray,
    card_front: Color::Blue,
    card_back: Color::Magenta,
});

/// Replace the global palette (startup and every theme toggle)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Session theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
}

impl ThemeType {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeType::Light => ThemeType::Dark,
            ThemeType::Dark => ThemeType::Light,
        }
    }

    /// Glyph for the theme button: the moon offers dark mode, the sun light mode.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeType::Light => "🌙",
            ThemeType::Dark => "☀️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
        }
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeType::Light),
            "dark" => Ok(ThemeType::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent color (borders, titles, buttons)
    pub primary: Color,
    /// Secondary accent (topic names)
    pub secondary: Color,

    pub success: Color,
    pub error: Color,

    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Emphasized text (greetings, key hints)
    pub text_emphasis: Color,

    pub border: Color,
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,

    /// Border of a card showing its question
    pub card_front: Color,
    /// Border of a card showing its answer
    pub card_back: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            card_front: Color::Cyan,
            card_back: Color::LightMagenta,
        }
    }

    /// Light theme - darker accents for light backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            card_front: Color::Blue,
            card_back: Color::Magenta,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style applied over a page while it is half faded
    pub fn dim_style(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Style for emphasized text
    pub fn emphasis_style(&self) -> Style {
        Style::default()
            .fg(self.text_emphasis)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for list item highlight (selected row)
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a flip card
    pub fn card_style(&self, front_visible: bool) -> Style {
        let color = if front_visible {
            self.card_front
        } else {
            self.card_back
        };
        Style::default().fg(color)
    }
}
