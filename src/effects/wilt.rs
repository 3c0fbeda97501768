//! The wilt timer: a transient visual state after a penalised guess.
//!
//! Modelled as a single deadline rather than a fire-and-forget task. Arming
//! again replaces the deadline, so an earlier miss can never clear the wilt
//! of a later one. The presentation layer polls with the current time.

use std::time::{Duration, Instant};

/// Cancelable, re-armable wilt deadline.
#[derive(Clone, Debug)]
pub struct WiltTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl WiltTimer {
    /// Create an idle timer that wilts for `duration` once armed.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Start (or restart) the wilt at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    /// Drop any pending wilt.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Deadline of the pending wilt, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Check whether the garden is wilting at `now`.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Expire the wilt if its deadline has passed.
    ///
    /// Returns true exactly once per armed wilt, on the first poll at or
    /// after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
