// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced presenter wrapper for consistent observability

use coaster_core::{Presenter, RideEvent};

/// Wrapper that logs every ride event before delegating to the inner presenter.
///
/// Controller events are logged at `info`, passenger events at `debug`.
#[derive(Clone)]
pub struct TracedPresenter<P> {
    inner: P,
}

impl<P> TracedPresenter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Presenter> Presenter for TracedPresenter<P> {
    fn notify(&self, event: &RideEvent) {
        let span = tracing::debug_span!("presenter.notify", event = event.name());
        let _guard = span.enter();

        match event {
            RideEvent::PassengerWaiting { id }
            | RideEvent::PassengerAdmitted { id }
            | RideEvent::PassengerReleased { id } => {
                tracing::debug!(passenger = %id, "passenger");
            }
            RideEvent::PassengerBoarded {
                id,
                occupancy,
                capacity,
            }
            | RideEvent::PassengerUnboarded {
                id,
                occupancy,
                capacity,
            } => {
                tracing::debug!(passenger = %id, occupancy, capacity, "passenger");
            }
            RideEvent::BoardingOpened { cycle, capacity }
            | RideEvent::UnboardingOpened { cycle, capacity } => {
                tracing::info!(cycle, capacity, "gate opened");
            }
            RideEvent::BatchFull { cycle }
            | RideEvent::RideFinished { cycle }
            | RideEvent::BatchEmpty { cycle } => {
                tracing::info!(cycle, "ride");
            }
            RideEvent::Stopped { cycles } => {
                tracing::info!(cycles, "ride stopped");
            }
        }

        self.inner.notify(event);
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
