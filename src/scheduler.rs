//! One-shot delayed events.
//!
//! The event loop is single-threaded, so "run this later" is a queue of
//! entries polled against the clock on every iteration. Each entry is owned
//! by the page that scheduled it; leaving the page cancels its entries so a
//! torn-down page is never acted upon.

use crate::navigation::PageId;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
struct Scheduled<E> {
    /// Insertion order, for stable firing order at equal deadlines
    seq: u64,
    owner: PageId,
    due: Instant,
    event: E,
}

/// Cancelable one-shot timers carrying an event payload.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_seq: u64,
    entries: Vec<Scheduled<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, owner: PageId, delay: Duration, now: Instant, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        debug!("Scheduled timer #{} for {} in {:?}", seq, owner, delay);
        self.entries.push(Scheduled {
            seq,
            owner,
            due: now + delay,
            event,
        });
    }

    /// Cancel every entry scheduled by `owner`. Returns how many were dropped.
    pub fn cancel_owned_by(&mut self, owner: &PageId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.owner != *owner);
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!("Cancelled {} timer(s) owned by {}", dropped, owner);
        }
        dropped
    }

    /// Remove and return every entry due at `now`, earliest first.
    pub fn poll_due(&mut self, now: Instant) -> Vec<E> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.event).collect()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
