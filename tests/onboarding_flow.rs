//! Integration tests for the onboarding pages: start, name, greeting,
//! welcome, the "New here?" question, tutorial and welcome back.

mod common;

use common::{TestApp, FADE};
use crossterm::event::KeyCode;
use remora::navigation::PageId;
use std::time::Duration;

#[test]
fn begin_leads_to_name_entry() {
    let mut t = TestApp::instant();
    assert!(t.render().contains("READY WHEN YOU ARE!"));

    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::NameEntry);
    let screen = t.render();
    assert!(screen.contains("ENTER YOUR NAME"));
    assert!(screen.contains("Type it here..."));
}

#[test]
fn greeting_uses_trimmed_name() {
    let mut t = TestApp::with_default_timings();
    t.press(KeyCode::Enter);
    t.advance(FADE);
    assert_eq!(t.current(), PageId::NameEntry);

    t.type_text("  Ada  ");
    t.press(KeyCode::Enter);
    // Still on the form until the fade-out finishes
    assert_eq!(t.current(), PageId::NameEntry);
    t.advance(FADE);

    assert_eq!(t.current(), PageId::Greeting);
    assert_eq!(t.app.session().username(), Some("Ada"));
    t.advance(FADE);
    assert!(t.render().contains("Hi, Ada!"));

    // Greeting hold is 1000 ms from the switch, then a fade
    t.advance(Duration::from_millis(500));
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Welcome);
    // Fully transparent right after the switch
    assert!(!t.render().contains("WELCOME!"));
    t.advance(FADE);
    let screen = t.render();
    assert!(screen.contains("WELCOME!"));
    assert!(screen.contains("Remora is a flashcard for students"));

    // Welcome hold is 1500 ms from its switch
    t.advance(Duration::from_millis(1000));
    t.advance(FADE);
    assert_eq!(t.current(), PageId::ReturningUser);
    t.advance(FADE);
    assert!(t.render().contains("New here?"));
}

#[test]
fn blank_name_shows_notice_and_stays() {
    let mut t = TestApp::instant();
    t.press(KeyCode::Enter);
    t.settle();

    t.type_text("   ");
    t.press(KeyCode::Enter);
    t.settle();

    assert_eq!(t.current(), PageId::NameEntry);
    assert_eq!(t.app.session().username(), None);
    let notice = t.app.global().notice.as_ref().expect("notice shown");
    assert_eq!(notice.title, "Name Required");
    assert!(t.render().contains("Please enter your name"));

    t.press(KeyCode::Enter);
    assert!(t.app.global().notice.is_none());
}

#[test]
fn new_user_goes_through_tutorial() {
    let mut t = TestApp::instant();
    t.press(KeyCode::Enter);
    t.settle();
    t.type_text("Grace");
    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::ReturningUser);

    t.press(KeyCode::Char('y'));
    t.settle();
    assert_eq!(t.current(), PageId::Tutorial);
    let screen = t.render();
    assert!(screen.contains("Adding Flashcards"));
    assert!(screen.contains("Next ➜"));

    t.press(KeyCode::Enter);
    t.press(KeyCode::Enter);
    let screen = t.render();
    assert!(screen.contains("Using Existing Flashcards"));
    assert!(screen.contains("Finish ✅"));

    t.press(KeyCode::Enter);
    t.settle();
    assert_eq!(t.current(), PageId::Hub);
    assert!(t.render().contains("What would you like to do, Grace?"));
}

#[test]
fn tutorial_restarts_on_reentry() {
    let mut t = TestApp::instant();
    t.go_to(PageId::Tutorial);
    t.press(KeyCode::Enter);
    t.press(KeyCode::Char('s'));
    t.settle();
    assert_eq!(t.current(), PageId::Hub);

    t.go_to(PageId::Tutorial);
    assert!(t.render().contains("Adding Flashcards"));
}

#[test]
fn returning_user_without_name_is_welcomed_as_user() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::WelcomeBack, t.now).unwrap();
    t.advance(FADE);
    assert_eq!(t.current(), PageId::WelcomeBack);
    t.advance(FADE);
    assert!(t.render().contains("Welcome back, User!"));

    // 2000 ms hold from the switch, then the fade to the hub
    t.advance(Duration::from_millis(1500));
    assert_eq!(t.current(), PageId::WelcomeBack);
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Hub);
}

#[test]
fn leaving_a_page_cancels_its_timer() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::Greeting, t.now).unwrap();
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Greeting);
    assert_eq!(t.app.pending_timers(), 1);

    t.app.navigate(PageId::Hub, t.now).unwrap();
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Hub);
    assert_eq!(t.app.pending_timers(), 0);

    t.advance(Duration::from_secs(5));
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Hub);
}

#[test]
fn new_here_answer_is_final_once_given() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::ReturningUser, t.now).unwrap();
    t.advance(FADE);
    t.advance(FADE);
    assert_eq!(t.current(), PageId::ReturningUser);

    t.press(KeyCode::Char('y'));
    t.advance(Duration::from_millis(100));
    // Changing the answer while the page fades out has no effect
    t.press(KeyCode::Char('n'));
    assert_eq!(t.app.navigator().in_flight(), Some(PageId::Tutorial));
    assert_eq!(t.app.navigator().queued(), None);

    t.advance(Duration::from_millis(400));
    assert_eq!(t.current(), PageId::Tutorial);
    t.advance(Duration::from_secs(5));
    t.advance(FADE);
    assert_eq!(t.current(), PageId::Tutorial);
    assert!(!t.app.navigator().is_transitioning());
}

#[test]
fn submitted_name_is_kept_while_leaving() {
    let mut t = TestApp::with_default_timings();
    t.app.navigate(PageId::NameEntry, t.now).unwrap();
    t.advance(FADE);
    t.advance(FADE);

    t.type_text("Ada");
    t.press(KeyCode::Enter);
    t.advance(Duration::from_millis(200));
    t.type_text("Bob");
    t.press(KeyCode::Enter);

    t.advance(Duration::from_millis(300));
    assert_eq!(t.current(), PageId::Greeting);
    assert_eq!(t.app.session().username(), Some("Ada"));
}

#[test]
fn global_keys_still_work_during_a_fade() {
    let mut t = TestApp::with_default_timings();
    t.press(KeyCode::Enter);
    assert!(t.app.navigator().in_flight().is_some());

    t.press(KeyCode::Char('t'));
    assert_ne!(t.app.session().theme(), t.app.config().theme);
    t.press(KeyCode::Char('q'));
    assert!(t.app.should_quit());
}
