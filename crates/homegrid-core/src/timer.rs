#![forbid(unsafe_code)]

//! One-shot cancellable timer slot.
//!
//! The recognizer never sleeps or spawns anything. Instead it owns a
//! [`OneShotTimer`] and publishes the armed deadline; the host schedules a
//! callback for it (or polls on its frame tick) and reports back with the
//! [`TimerId`] it was given.
//!
//! # Invariants
//!
//! 1. At most one deadline is armed at a time. Re-arming replaces it.
//! 2. [`OneShotTimer::cancel`] clears the handle synchronously, so a callback
//!    that was already queued by the host observes a stale id and
//!    [`OneShotTimer::fire`] returns `false`.
//! 3. A successful `fire` or `poll` clears the handle before returning, so a
//!    timer can fire at most once per arm.

use web_time::{Duration, Instant};

/// Handle identifying one arming of a [`OneShotTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw generation number, for logging.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A single cancellable deadline.
#[derive(Debug, Clone, Default)]
pub struct OneShotTimer {
    armed: Option<(TimerId, Instant)>,
    generation: u64,
}

impl OneShotTimer {
    /// Create an unarmed timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> TimerId {
        self.generation = self.generation.wrapping_add(1);
        let id = TimerId(self.generation);
        self.armed = Some((id, now + delay));
        id
    }

    /// Disarm the timer. No-op when nothing is armed.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Report that the host's callback for `id` ran.
    ///
    /// Returns `true` only if `id` is the currently armed deadline; the
    /// handle is cleared before returning.
    pub fn fire(&mut self, id: TimerId) -> bool {
        match self.armed {
            Some((armed, _)) if armed == id => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Fire the armed deadline if it has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TimerId> {
        let (id, deadline) = self.armed?;
        if now >= deadline {
            self.armed = None;
            Some(id)
        } else {
            None
        }
    }

    /// Currently armed deadline, if any.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<(TimerId, Instant)> {
        self.armed
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
