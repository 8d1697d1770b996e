//! Remora - a terminal flashcard study companion
//!
//! This library provides the page navigator, the onboarding flow and the
//! flashcard screens behind the `remora` binary.

// Core modules
pub mod animation;
pub mod app;
pub mod cards;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod keymap;
pub mod navigation;
pub mod onboarding;
pub mod scheduler;
pub mod screens;
pub mod session;
pub mod state;
pub mod styles;
pub mod tui;
pub mod tutorial;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::{Config, Timings};
pub use error::{NavigationError, ValidationError};
pub use navigation::{Navigator, PageId};
pub use session::SessionState;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
