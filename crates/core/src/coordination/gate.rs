// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting gate
//!
//! `open(n)` issues `n` units; each `acquire` blocks until a unit is
//! available and consumes it. Units never expire. Closing the gate revokes
//! outstanding units and wakes every blocked caller with
//! [`CoordinationError::Cancelled`].

use crate::error::CoordinationError;
use std::sync::{Condvar, Mutex};

#[derive(Debug, Default)]
struct GateState {
    units: usize,
    closed: bool,
}

#[derive(Debug)]
pub struct Gate {
    name: &'static str,
    state: Mutex<GateState>,
    available: Condvar,
}

impl Gate {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(GateState::default()),
            available: Condvar::new(),
        }
    }

    /// Issue `n` units, waking up to `n` blocked acquirers.
    ///
    /// Opening a closed gate does nothing.
    pub fn open(&self, n: usize) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.closed || n == 0 {
            return;
        }
        state.units += n;
        drop(state);

        tracing::trace!(gate = self.name, units = n, "opened");
        for _ in 0..n {
            self.available.notify_one();
        }
    }

    /// Block until a unit is available, then consume it
    pub fn acquire(&self) -> Result<(), CoordinationError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let mut state = self
            .available
            .wait_while(state, |s| s.units == 0 && !s.closed)
            .unwrap_or_else(|e| e.into_inner());

        if state.closed {
            return Err(CoordinationError::Cancelled);
        }
        state.units -= 1;
        Ok(())
    }

    /// Units issued but not yet acquired
    pub fn available(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).units
    }

    pub fn close(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.closed = true;
        state.units = 0;
        drop(state);
        self.available.notify_all();
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
