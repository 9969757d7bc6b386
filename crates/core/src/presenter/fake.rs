// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presenter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::Presenter;
use crate::event::RideEvent;
use std::sync::{Arc, Mutex};

/// Presenter that records every event in delivery order
#[derive(Clone, Default)]
pub struct FakePresenter {
    events: Arc<Mutex<Vec<RideEvent>>>,
}

impl FakePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events
    pub fn events(&self) -> Vec<RideEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Names of all recorded events
    pub fn names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(RideEvent::name)
            .collect()
    }

    /// Number of recorded events with the given name
    pub fn count(&self, name: &str) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|e| e.name() == name)
            .count()
    }
}

impl Presenter for FakePresenter {
    fn notify(&self, event: &RideEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
