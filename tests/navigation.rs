//! Integration tests for page navigation: queueing, back navigation, lazy
//! construction and unknown pages.

mod common;

use common::{TestApp, FADE};
use crossterm::event::KeyCode;
use remora::navigation::{NavigateOutcome, PageId};
use remora::NavigationError;

#[test]
fn navigating_to_current_page_is_ignored() {
    let mut t = TestApp::instant();
    t.go_to(PageId::Hub);
    let outcome = t.app.navigate(PageId::Hub, t.now).unwrap();
    assert_eq!(outcome, NavigateOutcome::Ignored);
    assert_eq!(t.app.navigator().in_flight(), None);
}

#[test]
fn latest_queued_request_wins() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::Hub, t.now).unwrap();
    t.advance(FADE);
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Hub);

    assert_eq!(
        t.app.navigate(PageId::Topics, t.now).unwrap(),
        NavigateOutcome::Started
    );
    assert_eq!(
        t.app.navigate(PageId::CreateFlashcard, t.now).unwrap(),
        NavigateOutcome::Queued
    );
    assert_eq!(
        t.app.navigate(PageId::SavedFlashcards, t.now).unwrap(),
        NavigateOutcome::Queued
    );
    assert_eq!(t.app.navigator().queued(), Some(PageId::SavedFlashcards));

    // First the running transition completes, then the queued one starts
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Topics);
    assert_eq!(t.app.navigator().in_flight(), Some(PageId::SavedFlashcards));

    t.advance(FADE);
    assert_eq!(t.current(), PageId::SavedFlashcards);
    assert!(!t.app.navigator().is_constructed(&PageId::CreateFlashcard));
}

#[test]
fn repeated_request_for_in_flight_target_is_ignored() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::NameEntry, t.now).unwrap();
    assert_eq!(
        t.app.navigate(PageId::NameEntry, t.now).unwrap(),
        NavigateOutcome::Ignored
    );
    assert_eq!(t.app.navigator().queued(), None);

    t.advance(FADE);
    assert_eq!(t.current(), PageId::NameEntry);
    assert_eq!(t.app.navigator().in_flight(), None);
}

#[test]
fn asking_again_for_the_running_target_cancels_the_queue() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::Hub, t.now).unwrap();
    t.advance(FADE);
    t.advance(FADE);

    t.app.navigate(PageId::Topics, t.now).unwrap();
    t.app.navigate(PageId::CreateFlashcard, t.now).unwrap();
    assert_eq!(
        t.app.navigate(PageId::Topics, t.now).unwrap(),
        NavigateOutcome::Ignored
    );

    t.advance(FADE);
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Topics);
    assert_eq!(t.app.navigator().in_flight(), None);
}

#[test]
fn escape_walks_back_to_hub() {
    let mut t = TestApp::instant();
    t.go_to(PageId::Hub);

    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Topics);

    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Topic("Mathematics"));

    t.press(KeyCode::Esc);
    t.settle();
    assert_eq!(t.current(), PageId::Topics);

    t.press(KeyCode::Esc);
    t.settle();
    assert_eq!(t.current(), PageId::Hub);

    // The hub has nowhere to go back to
    t.press(KeyCode::Esc);
    t.settle();
    assert_eq!(t.current(), PageId::Hub);
}

#[test]
fn pages_are_constructed_on_first_visit() {
    let mut t = TestApp::instant();
    let navigator = t.app.navigator();
    assert!(navigator.is_constructed(&PageId::Hub));
    assert!(!navigator.is_constructed(&PageId::Topics));
    assert!(!navigator.is_constructed(&PageId::Topic("Science")));

    t.go_to(PageId::Topics);
    assert!(t.app.navigator().is_constructed(&PageId::Topics));
    assert!(!t.app.navigator().is_constructed(&PageId::Topic("Science")));

    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Topic("Science"));
    assert!(t.app.navigator().is_constructed(&PageId::Topic("Science")));
}

#[test]
fn topic_page_keeps_flipped_cards_between_visits() {
    let mut t = TestApp::instant();
    t.go_to(PageId::Topics);
    t.press(KeyCode::Down);
    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Topic("History"));
    assert!(!t.render().contains("1945"));

    t.press(KeyCode::Char(' '));
    assert!(t.render().contains("1945"));

    t.press(KeyCode::Esc);
    t.settle();
    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Topic("History"));
    assert!(t.render().contains("1945"));
}

#[test]
fn unknown_page_is_an_error() {
    let mut t = TestApp::instant();
    let err = t
        .app
        .navigate(PageId::Topic("Chemistry"), t.now)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<NavigationError>(),
        Some(&NavigationError::UnknownPage(PageId::Topic("Chemistry")))
    );
    assert_eq!(t.current(), PageId::Start);
    assert_eq!(t.app.navigator().in_flight(), None);
}
