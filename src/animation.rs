//! Fixed-duration linear tweens.
//!
//! Every animation in the app (page fades, the hub sidebar) is a [`Tween`]
//! evaluated against an explicit `Instant`, so the event loop and the tests
//! drive time the same way.

use std::time::{Duration, Instant};

/// A linear interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    /// Start a tween at `started_at`.
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Fraction of the duration elapsed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    /// Whether the tween has reached its end value at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Start value.
    pub fn from(&self) -> f32 {
        self.from
    }


    /// When the tween will finish.
    pub fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }
}
