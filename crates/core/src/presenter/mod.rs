// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Presenter trait for observing the ride
//!
//! Presenters are called from passenger threads while they hold the ride
//! lock, so implementations must return quickly and must never call back
//! into the coordinator.

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePresenter;

use crate::event::RideEvent;

/// Fire-and-forget sink for ride state changes
pub trait Presenter: Clone + Send + Sync + 'static {
    fn notify(&self, event: &RideEvent);
}

/// Presenter that ignores every event
#[derive(Clone, Debug, Default)]
pub struct NoOpPresenter;

impl NoOpPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for NoOpPresenter {
    fn notify(&self, _event: &RideEvent) {}
}
