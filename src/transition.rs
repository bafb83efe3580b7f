//! The cosmetic fade marker and the clock that times it.

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    /// Starts at the current instant.
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Pending removals of the transition marker.
///
/// Removals are fire-and-forget: each apply schedules one, and any
/// removal that comes due clears the marker even if a later apply
/// re-added it.
#[derive(Debug, Default)]
pub(crate) struct TransitionTimers {
    deadlines: VecDeque<Instant>,
}

impl TransitionTimers {
    pub(crate) fn schedule(&mut self, at: Instant) {
        self.deadlines.push_back(at);
    }

    /// Drops every deadline at or before `now`, returning how many fired.
    pub(crate) fn expire(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.deadlines.front().is_some_and(|&at| at <= now) {
            self.deadlines.pop_front();
            fired += 1;
        }
        fired
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.front().copied()
    }
}
