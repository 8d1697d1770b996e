//! Shared test utilities for the integration tests.
//!
//! Provides `TestApp` - an `App` driven by synthetic key events and a
//! manually advanced clock, with its config file in a `TempDir`.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use remora::config::{Config, Timings};
use remora::navigation::PageId;
use remora::App;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 36;

/// Default fade length, for tests running with the shipped timings.
#[allow(dead_code)]
pub const FADE: Duration = Duration::from_millis(500);

#[allow(dead_code)]
pub struct TestApp {
    pub app: App,
    pub now: Instant,
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// All fades and holds take zero time.
    pub fn instant() -> Self {
        Self::with_config(Config {
            timings: Timings::instant(),
            ..Config::default()
        })
    }

    /// The shipped default timings.
    pub fn with_default_timings() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let now = Instant::now();
        let app = App::new(config, temp_dir.path().join("config.toml"), now)
            .expect("Failed to build app");
        Self { app, now, temp_dir }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.app
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)), self.now)
            .expect("Event handling failed");
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Move the clock forward and tick once.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.tick(self.now).expect("Tick failed");
    }

    /// Tick a few times without moving the clock, so zero-length fades and
    /// holds play out.
    pub fn settle(&mut self) {
        for _ in 0..8 {
            self.app.tick(self.now).expect("Tick failed");
        }
    }

    /// Navigate directly and let it finish (instant timings only).
    pub fn go_to(&mut self, page: PageId) {
        self.app.navigate(page, self.now).expect("Navigation failed");
        self.settle();
    }

    pub fn current(&self) -> PageId {
        self.app.current_page().expect("No current page")
    }

    /// Render one frame and return the screen as text, one line per row.
    pub fn render(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
        let now = self.now;
        let app = &mut self.app;
        terminal
            .draw(|frame| app.draw(frame, now).expect("Render failed"))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
