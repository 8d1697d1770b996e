//! Onboarding flow rules.
//!
//! ```text
//! start ─Begin─► name_entry ─valid name─► greeting ─hold─► welcome ─hold─► returning_user
//!                                                                          │yes      │no
//!                                                                          ▼         ▼
//!                                                                      tutorial  welcome_back ─hold─► hub
//!                                                                          └──finish/skip──► hub
//! ```
//!
//! The screens call into these functions so the transitions and texts are
//! defined in one place.

use crate::config::Timings;
use crate::error::ValidationError;
use crate::navigation::PageId;
use crate::session::SessionState;
use std::time::Duration;

/// Name shown when the user never entered one.
pub const FALLBACK_NAME: &str = "User";

pub fn greeting_text(name: &str) -> String {
    format!("Hi, {}!", name)
}

pub fn welcome_back_text(session: &SessionState) -> String {
    format!("Welcome back, {}!", session.username().unwrap_or(FALLBACK_NAME))
}

/// Validate and store the entered name, returning the page to show next.
pub fn submit_name(input: &str, session: &mut SessionState) -> Result<PageId, ValidationError> {
    session.set_username(input)?;
    Ok(PageId::Greeting)
}

/// Answer to "New here?".
pub fn returning_user_choice(new_here: bool) -> PageId {
    if new_here {
        PageId::Tutorial
    } else {
        PageId::WelcomeBack
    }
}

/// Pages that move on by themselves: how long they stay up and where they go.
pub fn auto_advance(page: PageId, timings: &Timings) -> Option<(Duration, PageId)> {
    match page {
        PageId::Greeting => Some((timings.greeting_hold(), PageId::Welcome)),
        PageId::Welcome => Some((timings.welcome_hold(), PageId::ReturningUser)),
        PageId::WelcomeBack => Some((timings.welcome_back_hold(), PageId::Hub)),
        _ => None,
    }
}
