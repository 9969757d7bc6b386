// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot stop latch
//!
//! Once set it stays set. Timed pauses wait on the latch instead of
//! sleeping, so setting it cuts every pause short.

use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Latch {
    set: Mutex<bool>,
    changed: Condvar,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latch, waking every paused thread.
    ///
    /// Returns `true` only for the call that actually set it.
    pub fn trigger(&self) -> bool {
        let mut set = self.set.lock().unwrap_or_else(|e| e.into_inner());
        if *set {
            return false;
        }
        *set = true;
        drop(set);
        self.changed.notify_all();
        true
    }

    pub fn is_set(&self) -> bool {
        *self.set.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Pause for up to `timeout`, returning early once the latch is set.
    ///
    /// Returns how long the caller actually paused.
    pub fn pause(&self, timeout: Duration) -> Duration {
        let start = Instant::now();
        if timeout.is_zero() {
            return Duration::ZERO;
        }
        let set = self.set.lock().unwrap_or_else(|e| e.into_inner());
        let _ = self
            .changed
            .wait_timeout_while(set, timeout, |set| !*set)
            .unwrap_or_else(|e| e.into_inner());
        start.elapsed().min(timeout)
    }
}

#[cfg(test)]
#[path = "latch_tests.rs"]
mod tests;
