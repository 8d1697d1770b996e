use crate::cards::builtin_topics;
use crate::components::{Footer, HelpOverlay, TopBar};
use crate::config::{Config, Timings};
use crate::error::NavigationError;
use crate::keymap::Action;
use crate::navigation::{NavEvent, NavigateOutcome, Navigator, PageId};
use crate::onboarding::auto_advance;
use crate::scheduler::Scheduler;
use crate::screens::{
    key_press, CreateFlashcardScreen, HubScreen, MessageKind, MessageScreen, NameEntryScreen,
    RenderContext, ReturningUserScreen, SavedFlashcardsScreen, Screen, ScreenAction,
    ScreenContext, StartScreen, TopicScreen, TopicsScreen, TutorialScreen,
};
use crate::session::SessionState;
use crate::state::GlobalState;
use crate::styles::{init_theme, theme, ThemeType};
use crate::tui::Tui;
use crate::utils::create_standard_layout;
use crate::widgets::{Dialog, ToastManager};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Pages at or below this opacity are not drawn at all.
const HIDDEN_OPACITY: f32 = 0.05;
/// Pages below this opacity are drawn dimmed.
const DIM_OPACITY: f32 = 0.6;
/// Poll interval while something is animating (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval when idle.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Payload of the scheduler's one-shot timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// Move on from an auto-advancing page.
    Advance { from: PageId, to: PageId },
}

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    navigator: Navigator<Box<dyn Screen>>,
    session: SessionState,
    scheduler: Scheduler<ScheduledEvent>,
    toasts: ToastManager,
    global: GlobalState,
    should_quit: bool,
}

impl App {
    /// Build every page and show the start page.
    pub fn new(config: Config, config_path: PathBuf, now: Instant) -> Result<Self> {
        let session = SessionState::new(config.theme);
        init_theme(session.theme());

        let mut navigator = Navigator::new(config.timings.fade());
        register_pages(&mut navigator, &config.timings, now).context("Failed to register pages")?;
        navigator.show_initial(PageId::Start, now)?;

        let mut app = Self {
            config,
            config_path,
            navigator,
            session,
            scheduler: Scheduler::new(),
            toasts: ToastManager::new(),
            global: GlobalState::new(),
            should_quit: false,
        };
        app.enter_page(PageId::Start, now)?;
        Ok(app)
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        let result = self.event_loop(tui);
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let now = Instant::now();
            self.tick(now)?;

            let mut rendered = Ok(());
            tui.terminal_mut()
                .draw(|frame| rendered = self.draw(frame, now))
                .context("Failed to draw frame")?;
            rendered?;

            if self.should_quit {
                break;
            }

            let timeout = self.poll_timeout(Instant::now());
            if let Some(event) = tui.poll_event(timeout)? {
                self.handle_event(event, Instant::now())?;
            }
        }
        Ok(())
    }

    /// Route one input event: overlays first, then global keys, then the page.
    ///
    /// Page input is dropped while a transition is in flight.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        let Some(key) = key_press(&event) else {
            return Ok(());
        };
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        let action = self.config.keymap.get_action(key.code, key.modifiers);
        if self.global.notice.is_some() {
            if matches!(action, Some(Action::Confirm | Action::Cancel)) {
                self.global.dismiss_notice();
            }
            return Ok(());
        }
        if self.global.show_help_overlay {
            self.global.toggle_help();
            return Ok(());
        }

        if !self.is_input_focused() {
            let global = match action {
                Some(Action::Quit) => ScreenAction::Quit,
                Some(Action::Help) => ScreenAction::ShowHelp,
                Some(Action::ToggleTheme) => ScreenAction::ToggleTheme,
                _ => ScreenAction::None,
            };
            if global != ScreenAction::None {
                return self.apply_action(global, now);
            }
        }

        // The leaving page no longer takes input
        if let Some(target) = self.navigator.in_flight() {
            debug!("Dropping page input while navigating to {}", target);
            return Ok(());
        }

        let action = {
            let Some((_, _, page)) = self.navigator.current_page_mut() else {
                return Ok(());
            };
            let mut ctx = ScreenContext::new(&self.config, &mut self.session, now);
            page.handle_event(event, &mut ctx)?
        };
        self.apply_action(action, now)
    }

    fn apply_action(&mut self, action: ScreenAction, now: Instant) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => {
                self.navigate(target, now)?;
            }
            ScreenAction::Back => {
                if let Some(parent) = self.navigator.current().and_then(|id| id.parent()) {
                    self.navigate(parent, now)?;
                }
            }
            ScreenAction::ShowNotice {
                title,
                content,
                variant,
            } => self.global.show_notice(title, content, variant),
            ScreenAction::ToggleTheme => self.toggle_theme(now),
            ScreenAction::ShowHelp => self.global.toggle_help(),
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Request a page change. The switch happens on a later [`tick`](Self::tick).
    pub fn navigate(&mut self, target: PageId, now: Instant) -> Result<NavigateOutcome> {
        let outcome = self.navigator.navigate(target, now)?;
        if outcome == NavigateOutcome::Ignored {
            debug!("Navigation to {} ignored", target);
        }
        Ok(outcome)
    }

    /// Advance animations, perform page switches and fire due timers.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        for event in self.navigator.tick(now) {
            if let NavEvent::Switched { from, to } = event {
                self.scheduler.cancel_owned_by(&from);
                self.enter_page(to, now)?;
            }
        }

        for event in self.scheduler.poll_due(now) {
            match event {
                ScheduledEvent::Advance { from, to } => {
                    if self.navigator.current() == Some(from) && self.navigator.in_flight().is_none()
                    {
                        self.navigate(to, now)?;
                    } else {
                        warn!("Dropping stale advance {} -> {}", from, to);
                    }
                }
            }
        }

        self.toasts.tick(now);
        Ok(())
    }

    fn enter_page(&mut self, id: PageId, now: Instant) -> Result<()> {
        if let Some(page) = self.navigator.page_mut(&id) {
            let mut ctx = ScreenContext::new(&self.config, &mut self.session, now);
            page.on_enter(&mut ctx)
                .with_context(|| format!("Failed to enter page {}", id))?;
        }
        if let Some((delay, to)) = auto_advance(id, &self.config.timings) {
            self.scheduler
                .schedule(id, delay, now, ScheduledEvent::Advance { from: id, to });
        }
        Ok(())
    }

    fn toggle_theme(&mut self, now: Instant) {
        let theme_type = self.session.toggle_theme();
        init_theme(theme_type);
        info!("Theme switched to {}", theme_type.as_str());
        let label = match theme_type {
            ThemeType::Light => "Light theme",
            ThemeType::Dark => "Dark theme",
        };
        self.toasts.info(label, now);
    }

    /// Draw the top bar, the current page at its opacity, the footer and overlays.
    pub fn draw(&mut self, frame: &mut Frame, now: Instant) -> Result<()> {
        let area = frame.area();
        let [top, body, footer] = create_standard_layout(area, 1, 1);
        let keymap = &self.config.keymap;

        let Some((id, opacity, page)) = self.navigator.current_page_mut() else {
            return Ok(());
        };
        TopBar::render(frame, top, &id.title(), self.session.theme());

        if opacity > HIDDEN_OPACITY {
            let ctx = RenderContext::new(&self.config, &self.session, now);
            page.render(frame, body, &ctx)
                .with_context(|| format!("Failed to render page {}", id))?;
            if opacity < DIM_OPACITY {
                frame.buffer_mut().set_style(body, theme().dim_style());
            }
        }
        Footer::render(frame, footer, &page.footer_hints(keymap));
        self.toasts.render(frame, body);

        if let Some(notice) = &self.global.notice {
            frame.render_widget(
                Dialog::new(&notice.title, &notice.content)
                    .variant(notice.variant)
                    .footer("Press Enter to continue"),
                area,
            );
        }
        if self.global.show_help_overlay {
            HelpOverlay::render(frame, area, keymap, &self.config_path.display().to_string());
        }
        Ok(())
    }

    /// Earliest moment something changes without input.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.navigator.next_deadline(),
            self.scheduler.next_deadline(),
            self.toasts.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Whether a page fade or a page's own animation is running at `now`.
    pub fn is_animating(&mut self, now: Instant) -> bool {
        self.navigator.is_transitioning()
            || self
                .navigator
                .current_page_mut()
                .is_some_and(|(_, _, page)| page.is_animating(now))
    }

    fn poll_timeout(&mut self, now: Instant) -> Duration {
        if self.is_animating(now) {
            return FRAME_INTERVAL;
        }
        self.next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }

    fn is_input_focused(&mut self) -> bool {
        self.navigator
            .current_page_mut()
            .is_some_and(|(_, _, page)| page.is_input_focused())
    }

    pub fn current_page(&self) -> Option<PageId> {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator<Box<dyn Screen>> {
        &self.navigator
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn global(&self) -> &GlobalState {
        &self.global
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Number of timers still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Onboarding pages and the hub are built up front; the rest on first visit.
fn register_pages(
    navigator: &mut Navigator<Box<dyn Screen>>,
    timings: &Timings,
    now: Instant,
) -> Result<(), NavigationError> {
    navigator.register(PageId::Start, Box::new(StartScreen::new()))?;
    navigator.register(PageId::NameEntry, Box::new(NameEntryScreen::new()))?;
    navigator.register(
        PageId::Greeting,
        Box::new(MessageScreen::new(MessageKind::Greeting)),
    )?;
    navigator.register(
        PageId::Welcome,
        Box::new(MessageScreen::new(MessageKind::Welcome)),
    )?;
    navigator.register(PageId::ReturningUser, Box::new(ReturningUserScreen::new()))?;
    navigator.register(PageId::Tutorial, Box::new(TutorialScreen::new()))?;
    navigator.register(
        PageId::WelcomeBack,
        Box::new(MessageScreen::new(MessageKind::WelcomeBack)),
    )?;
    navigator.register(PageId::Hub, Box::new(HubScreen::new(timings.sidebar(), now)))?;

    navigator.register_lazy(PageId::Topics, || -> Box<dyn Screen> {
        Box::new(TopicsScreen::new())
    })?;
    navigator.register_lazy(PageId::CreateFlashcard, || -> Box<dyn Screen> {
        Box::new(CreateFlashcardScreen::new())
    })?;
    navigator.register_lazy(PageId::SavedFlashcards, || -> Box<dyn Screen> {
        Box::new(SavedFlashcardsScreen::new())
    })?;
    for topic in builtin_topics() {
        navigator.register_lazy(PageId::Topic(topic.name), move || -> Box<dyn Screen> {
            Box::new(TopicScreen::new(topic))
        })?;
    }
    Ok(())
}
