//! Page registry and transition serialization.

use super::transition::{TransitionController, TransitionPhase};
use super::PageId;
use crate::error::NavigationError;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What happened to a [`Navigator::navigate`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// The current page started leaving toward the target.
    Started,
    /// Another transition is in flight; the request runs after it completes.
    Queued,
    /// The target is already current or already the in-flight target.
    Ignored,
}

/// Events produced by [`Navigator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// A leave animation finished and `to` became the current page.
    Switched { from: PageId, to: PageId },
    /// A page finished fading in.
    Entered(PageId),
}

type Factory<P> = Box<dyn FnMut() -> P>;

struct PageSlot<P> {
    id: PageId,
    content: Option<P>,
    factory: Option<Factory<P>>,
    transition: TransitionController,
}

/// Owns the registered pages and the single current page.
///
/// At most one transition is in flight at a time. A request made while one is
/// running is queued (latest request wins) and started once the running
/// leave animation reports completion.
pub struct Navigator<P> {
    pages: Vec<PageSlot<P>>,
    current: Option<PageId>,
    in_flight: Option<PageId>,
    queued: Option<PageId>,
    fade: Duration,
}

impl<P> Navigator<P> {
    /// Create an empty navigator whose pages fade over `fade`.
    pub fn new(fade: Duration) -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            in_flight: None,
            queued: None,
            fade,
        }
    }

    /// Register an already constructed page.
    pub fn register(&mut self, id: PageId, page: P) -> Result<(), NavigationError> {
        self.insert(id, Some(page), None)
    }

    /// Register a page that is constructed on first use.
    pub fn register_lazy(
        &mut self,
        id: PageId,
        factory: impl FnMut() -> P + 'static,
    ) -> Result<(), NavigationError> {
        self.insert(id, None, Some(Box::new(factory)))
    }

    fn insert(
        &mut self,
        id: PageId,
        content: Option<P>,
        factory: Option<Factory<P>>,
    ) -> Result<(), NavigationError> {
        if self.is_registered(&id) {
            return Err(NavigationError::DuplicateId(id));
        }
        self.pages.push(PageSlot {
            id,
            content,
            factory,
            transition: TransitionController::new(self.fade),
        });
        Ok(())
    }

    pub fn is_registered(&self, id: &PageId) -> bool {
        self.pages.iter().any(|slot| slot.id == *id)
    }

    /// Whether the page content exists (eager pages always do).
    pub fn is_constructed(&self, id: &PageId) -> bool {
        self.slot(id).is_some_and(|slot| slot.content.is_some())
    }

    /// Page content, constructing it through its factory on first use.
    pub fn get_or_create(&mut self, id: &PageId) -> Result<&mut P, NavigationError> {
        let slot = self
            .pages
            .iter_mut()
            .find(|slot| slot.id == *id)
            .ok_or(NavigationError::UnknownPage(*id))?;

        let PageSlot {
            content, factory, ..
        } = slot;
        match factory {
            Some(factory) => {
                if content.is_none() {
                    debug!("Constructing page {}", id);
                }
                Ok(content.get_or_insert_with(|| factory()))
            }
            None => content.as_mut().ok_or(NavigationError::UnknownPage(*id)),
        }
    }

    /// Page content if it has been constructed.
    pub fn page_mut(&mut self, id: &PageId) -> Option<&mut P> {
        self.slot_mut(id).and_then(|slot| slot.content.as_mut())
    }

    /// Make `id` the current page and fade it in. Used once at startup.
    pub fn show_initial(&mut self, id: PageId, now: Instant) -> Result<(), NavigationError> {
        self.get_or_create(&id)?;
        if let Some(slot) = self.slot_mut(&id) {
            slot.transition.enter(now);
        }
        self.current = Some(id);
        info!("Initial page: {}", id);
        Ok(())
    }

    /// Request a transition from the current page to `target`.
    ///
    /// Non-blocking: the current page only changes once the leave animation
    /// has finished (see [`tick`](Self::tick)).
    pub fn navigate(
        &mut self,
        target: PageId,
        now: Instant,
    ) -> Result<NavigateOutcome, NavigationError> {
        if !self.is_registered(&target) {
            return Err(NavigationError::UnknownPage(target));
        }

        if let Some(in_flight) = self.in_flight {
            if in_flight == target {
                // Latest request wins, and it is the one already running
                self.queued = None;
                return Ok(NavigateOutcome::Ignored);
            }
            debug!("Queueing navigation to {} behind {}", target, in_flight);
            self.queued = Some(target);
            return Ok(NavigateOutcome::Queued);
        }

        let Some(current) = self.current else {
            self.show_initial(target, now)?;
            return Ok(NavigateOutcome::Started);
        };
        if current == target {
            return Ok(NavigateOutcome::Ignored);
        }

        self.get_or_create(&target)?;
        let started = self
            .slot_mut(&current)
            .is_some_and(|slot| slot.transition.leave_to(target, now));
        if !started {
            warn!("Page {} refused to leave toward {}", current, target);
            self.queued = Some(target);
            return Ok(NavigateOutcome::Queued);
        }

        info!("Navigating {} -> {}", current, target);
        self.in_flight = Some(target);
        Ok(NavigateOutcome::Started)
    }

    /// The page currently marked as showing.
    pub fn current(&self) -> Option<PageId> {
        self.current
    }

    /// Target of the running transition, if any.
    pub fn in_flight(&self) -> Option<PageId> {
        self.in_flight
    }

    /// Request waiting for the running transition to finish.
    pub fn queued(&self) -> Option<PageId> {
        self.queued
    }

    /// Whether any page is animating.
    pub fn is_transitioning(&self) -> bool {
        self.pages.iter().any(|slot| slot.transition.is_animating())
    }

    /// Opacity of `id` (0.0 for unknown pages).
    pub fn opacity(&self, id: &PageId) -> f32 {
        self.slot(id).map_or(0.0, |slot| slot.transition.opacity())
    }

    /// Current page content together with its opacity.
    pub fn current_page_mut(&mut self) -> Option<(PageId, f32, &mut P)> {
        let id = self.current?;
        let slot = self.slot_mut(&id)?;
        let opacity = slot.transition.opacity();
        slot.content.as_mut().map(|page| (id, opacity, page))
    }

    /// Earliest moment a running animation finishes.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pages
            .iter()
            .filter_map(|slot| slot.transition.deadline())
            .min()
    }

    /// Advance every page animation and perform finished hand-offs.
    pub fn tick(&mut self, now: Instant) -> Vec<NavEvent> {
        let mut events = Vec::new();
        let mut handoffs = Vec::new();

        for slot in &mut self.pages {
            let was_entering = matches!(slot.transition.phase(), TransitionPhase::Entering(_));
            if let Some(target) = slot.transition.tick(now) {
                handoffs.push((slot.id, target));
            } else if was_entering && !slot.transition.is_animating() {
                events.push(NavEvent::Entered(slot.id));
            }
        }

        for (from, to) in handoffs {
            self.in_flight = None;
            self.current = Some(to);
            if let Some(slot) = self.slot_mut(&to) {
                slot.transition.enter(now);
            }
            info!("Switched {} -> {}", from, to);
            events.push(NavEvent::Switched { from, to });
        }

        if self.in_flight.is_none() {
            if let Some(next) = self.queued.take() {
                if let Err(err) = self.navigate(next, now) {
                    warn!("Dropping queued navigation: {}", err);
                }
            }
        }

        events
    }

    fn slot(&self, id: &PageId) -> Option<&PageSlot<P>> {
        self.pages.iter().find(|slot| slot.id == *id)
    }

    fn slot_mut(&mut self, id: &PageId) -> Option<&mut PageSlot<P>> {
        self.pages.iter_mut().find(|slot| slot.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const FADE: Duration = Duration::from_millis(500);

    fn navigator() -> Navigator<&'static str> {
        let mut nav = Navigator::new(FADE);
        nav.register(PageId::Start, "start").unwrap();
        nav.register(PageId::NameEntry, "name").unwrap();
        nav.register(PageId::Hub, "hub").unwrap();
        nav
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut nav = navigator();
        assert_eq!(
            nav.register(PageId::Hub, "again"),
            Err(NavigationError::DuplicateId(PageId::Hub))
        );
        assert!(matches!(
            nav.register_lazy(PageId::Start, || "lazy"),
            Err(NavigationError::DuplicateId(PageId::Start))
        ));
    }

    #[test]
    fn test_navigate_switches_after_leave_completes() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Start, start).unwrap();
        nav.tick(start + FADE);

        let t0 = start + FADE;
        assert_eq!(
            nav.navigate(PageId::NameEntry, t0).unwrap(),
            NavigateOutcome::Started
        );
        // Still the old page until the leave animation finishes
        assert_eq!(nav.current(), Some(PageId::Start));
        assert_eq!(nav.in_flight(), Some(PageId::NameEntry));

        let events = nav.tick(t0 + FADE);
        assert_eq!(
            events,
            vec![NavEvent::Switched {
                from: PageId::Start,
                to: PageId::NameEntry
            }]
        );
        assert_eq!(nav.current(), Some(PageId::NameEntry));
        assert_eq!(nav.in_flight(), None);

        let events = nav.tick(t0 + FADE * 2);
        assert_eq!(events, vec![NavEvent::Entered(PageId::NameEntry)]);
        assert!((nav.opacity(&PageId::NameEntry) - 1.0).abs() < f32::EPSILON);
        assert!(nav.opacity(&PageId::Start).abs() < f32::EPSILON);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Hub, start).unwrap();
        nav.tick(start + FADE);

        assert_eq!(
            nav.navigate(PageId::Hub, start + FADE).unwrap(),
            NavigateOutcome::Ignored
        );
        assert!(!nav.is_transitioning());
        assert_eq!(nav.in_flight(), None);
        assert!(nav.tick(start + FADE * 3).is_empty());
    }

    #[test]
    fn test_navigate_to_in_flight_target_is_noop() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Start, start).unwrap();
        nav.tick(start + FADE);

        nav.navigate(PageId::Hub, start + FADE).unwrap();
        assert_eq!(
            nav.navigate(PageId::Hub, start + FADE).unwrap(),
            NavigateOutcome::Ignored
        );
        assert_eq!(nav.queued(), None);
    }

    #[test]
    fn test_request_during_transition_is_queued() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Start, start).unwrap();
        nav.tick(start + FADE);

        let t0 = start + FADE;
        nav.navigate(PageId::NameEntry, t0).unwrap();
        assert_eq!(
            nav.navigate(PageId::Hub, t0 + Duration::from_millis(100)).unwrap(),
            NavigateOutcome::Queued
        );

        // First hand-off completes exactly once, then the queued leave starts
        let events = nav.tick(t0 + FADE);
        assert_eq!(
            events,
            vec![NavEvent::Switched {
                from: PageId::Start,
                to: PageId::NameEntry
            }]
        );
        assert_eq!(nav.in_flight(), Some(PageId::Hub));

        let events = nav.tick(t0 + FADE * 2);
        assert!(events.contains(&NavEvent::Switched {
            from: PageId::NameEntry,
            to: PageId::Hub
        }));
        assert_eq!(nav.current(), Some(PageId::Hub));
    }

    #[test]
    fn test_repeating_in_flight_target_drops_queued_request() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Start, start).unwrap();
        nav.tick(start + FADE);

        let t0 = start + FADE;
        nav.navigate(PageId::NameEntry, t0).unwrap();
        nav.navigate(PageId::Hub, t0).unwrap();
        assert_eq!(nav.queued(), Some(PageId::Hub));
        assert_eq!(
            nav.navigate(PageId::NameEntry, t0).unwrap(),
            NavigateOutcome::Ignored
        );
        assert_eq!(nav.queued(), None);

        nav.tick(t0 + FADE);
        assert_eq!(nav.current(), Some(PageId::NameEntry));
        assert_eq!(nav.in_flight(), None);
        nav.tick(t0 + FADE * 2);
        assert_eq!(nav.current(), Some(PageId::NameEntry));
    }

    #[test]
    fn test_unknown_target_is_an_error() {
        let mut nav = navigator();
        assert_eq!(
            nav.navigate(PageId::Topics, Instant::now()),
            Err(NavigationError::UnknownPage(PageId::Topics))
        );
    }

    #[test]
    fn test_lazy_pages_are_built_once() {
        let built = Rc::new(Cell::new(0));
        let counter = Rc::clone(&built);
        let mut nav: Navigator<String> = Navigator::new(FADE);
        nav.register_lazy(PageId::Topics, move || {
            counter.set(counter.get() + 1);
            "topics".to_string()
        })
        .unwrap();

        assert!(!nav.is_constructed(&PageId::Topics));
        nav.get_or_create(&PageId::Topics).unwrap().push('!');
        assert_eq!(nav.get_or_create(&PageId::Topics).unwrap().as_str(), "topics!");
        assert_eq!(built.get(), 1);
        assert!(nav.is_constructed(&PageId::Topics));
    }

    #[test]
    fn test_navigate_constructs_lazy_target() {
        let start = Instant::now();
        let mut nav: Navigator<String> = Navigator::new(FADE);
        nav.register(PageId::Hub, "hub".to_string()).unwrap();
        nav.register_lazy(PageId::SavedFlashcards, || "saved".to_string())
            .unwrap();
        nav.show_initial(PageId::Hub, start).unwrap();

        nav.navigate(PageId::SavedFlashcards, start).unwrap();
        assert!(nav.is_constructed(&PageId::SavedFlashcards));
    }

    #[test]
    fn test_current_page_reports_opacity() {
        let start = Instant::now();
        let mut nav = navigator();
        nav.show_initial(PageId::Start, start).unwrap();
        nav.tick(start + Duration::from_millis(250));

        let (id, opacity, page) = nav.current_page_mut().unwrap();
        assert_eq!(id, PageId::Start);
        assert_eq!(*page, "start");
        assert!(opacity > 0.4 && opacity < 0.6);
        assert_eq!(nav.next_deadline(), Some(start + FADE));
    }
}
