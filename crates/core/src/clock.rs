// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling
//!
//! Every pause in the ride (boarding a seat, the ride itself, leaving a seat)
//! goes through [`Clock::delay`], so tests can swap real sleeping for a clock
//! that only moves its own hands. A pause ends early once the ride's stop
//! [`Latch`] is set.

use crate::coordination::Latch;
use crate::delay::DelayRange;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A clock that provides the current time and variable-length pauses
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;

    /// Block the calling thread for a duration drawn from `range`, or until
    /// `stop` is set.
    ///
    /// Returns how long the thread actually paused.
    fn delay(&self, range: DelayRange, stop: &Latch) -> Duration;
}

/// Real system clock
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay(&self, range: DelayRange, stop: &Latch) -> Duration {
        let duration = range.sample(&mut rand::thread_rng());
        stop.pause(duration)
    }
}

/// Fake clock for testing with controllable time
///
/// `delay` never blocks: it records the range it was asked for and advances
/// the clock by the range minimum, or not at all once `stop` is set.
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
    delays: Arc<Mutex<Vec<DelayRange>>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
            delays: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Every range passed to `delay`, in call order
    pub fn delays(&self) -> Vec<DelayRange> {
        self.delays.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn delay(&self, range: DelayRange, stop: &Latch) -> Duration {
        self.delays
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(range);
        if stop.is_set() {
            return Duration::ZERO;
        }
        self.advance(range.min());
        range.min()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
