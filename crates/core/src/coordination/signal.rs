// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion signal
//!
//! Posts are remembered until waited on, so a post that happens before the
//! waiter arrives is never lost. Unlike [`Gate`](super::Gate), closing keeps
//! pending posts: a completion that already happened is still reported to
//! the waiter, and only an empty signal answers with
//! [`CoordinationError::Cancelled`].

use crate::error::CoordinationError;
use std::sync::{Condvar, Mutex};

#[derive(Debug, Default)]
struct SignalState {
    pending: usize,
    closed: bool,
}

#[derive(Debug)]
pub struct Signal {
    name: &'static str,
    state: Mutex<SignalState>,
    posted: Condvar,
}

impl Signal {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(SignalState::default()),
            posted: Condvar::new(),
        }
    }

    pub fn post(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.pending += 1;
        drop(state);

        tracing::trace!(signal = self.name, "posted");
        self.posted.notify_one();
    }

    /// Block until a post is pending, then consume it
    pub fn wait(&self) -> Result<(), CoordinationError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let mut state = self
            .posted
            .wait_while(state, |s| s.pending == 0 && !s.closed)
            .unwrap_or_else(|e| e.into_inner());

        if state.pending == 0 {
            return Err(CoordinationError::Cancelled);
        }
        state.pending -= 1;
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).pending > 0
    }

    pub fn close(&self) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).closed = true;
        self.posted.notify_all();
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
