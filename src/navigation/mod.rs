//! Page navigation and transitions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Navigator                           │
//! │   pages: [PageSlot { id, content | factory, controller }] │
//! │   current ─────┐        in_flight / queued                │
//! │                ▼                                          │
//! │   TransitionController (current)  leave_to(target)        │
//! │         │ tick: finished                                  │
//! │         ▼                                                 │
//! │   current = target ──► TransitionController (target).enter│
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The app calls [`Navigator::tick`] on every loop iteration; the returned
//! [`NavEvent`]s are the only way page switches are observed.

pub mod navigator;
pub mod page;
pub mod transition;

pub use navigator::{NavEvent, NavigateOutcome, Navigator};
pub use page::PageId;
pub use transition::{TransitionController, TransitionPhase};
