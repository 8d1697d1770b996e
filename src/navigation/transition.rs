//! Per-page fade controller.
//!
//! Each page owns one [`TransitionController`] holding a single opacity value.
//! The controller is a small two-phase state machine:
//!
//! ```text
//!   Idle ──enter()──► Entering ──finished──► Idle (opacity 1)
//!   Idle ──leave_to(t)──► Leaving(t) ──finished──► Idle (opacity 0), reports t
//! ```
//!
//! Completion is observed by calling [`TransitionController::tick`]; a leave
//! reports its target exactly once because the phase returns to `Idle` in the
//! same call.

use super::PageId;
use crate::animation::Tween;
use std::time::{Duration, Instant};

/// Current animation phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    /// No animation running.
    Idle,
    /// Fading toward fully visible.
    Entering(Tween),
    /// Fading toward hidden; hands off to `target` when done.
    Leaving { target: PageId, tween: Tween },
}

/// Opacity state and fade sequencing for one page.
#[derive(Debug, Clone)]
pub struct TransitionController {
    opacity: f32,
    phase: TransitionPhase,
    duration: Duration,
}

impl TransitionController {
    /// Create a hidden, idle controller.
    pub fn new(duration: Duration) -> Self {
        Self {
            opacity: 0.0,
            phase: TransitionPhase::Idle,
            duration,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, TransitionPhase::Leaving { .. })
    }

    /// When the running animation will finish.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            TransitionPhase::Idle => None,
            TransitionPhase::Entering(tween) | TransitionPhase::Leaving { tween, .. } => {
                Some(tween.deadline())
            }
        }
    }

    /// Fade toward fully visible, starting from the current opacity.
    ///
    /// Returns `false` (and does nothing) while a leave is running; the leave
    /// must report its completion first.
    pub fn enter(&mut self, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = TransitionPhase::Entering(Tween::new(self.opacity, 1.0, now, self.duration));
        self.sample(now);
        true
    }

    /// Fade toward hidden, then report `target` from [`tick`](Self::tick).
    ///
    /// Returns `false` if a leave is already running. Callers queue the new
    /// request until the running one has completed.
    pub fn leave_to(&mut self, target: PageId, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.sample(now);
        self.phase = TransitionPhase::Leaving {
            target,
            tween: Tween::new(self.opacity, 0.0, now, self.duration),
        };
        self.sample(now);
        true
    }

    /// Advance the animation. Returns the leave target when a leave finishes.
    pub fn tick(&mut self, now: Instant) -> Option<PageId> {
        self.sample(now);
        match self.phase {
            TransitionPhase::Entering(tween) if tween.is_finished(now) => {
                self.opacity = 1.0;
                self.phase = TransitionPhase::Idle;
                None
            }
            TransitionPhase::Leaving { target, tween } if tween.is_finished(now) => {
                self.opacity = 0.0;
                self.phase = TransitionPhase::Idle;
                Some(target)
            }
            _ => None,
        }
    }

    fn sample(&mut self, now: Instant) {
        match &self.phase {
            TransitionPhase::Idle => {}
            TransitionPhase::Entering(tween) | TransitionPhase::Leaving { tween, .. } => {
                self.opacity = tween.value_at(now);
            }
        }
    }
}
