// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster presenter: the latest known state of every passenger

use coaster_core::{PassengerId, PassengerState, Presenter, RideEvent};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Presenter that tracks each passenger's most recent lifecycle state
#[derive(Clone, Default)]
pub struct RosterPresenter {
    states: Arc<Mutex<BTreeMap<PassengerId, PassengerState>>>,
}

impl RosterPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn states(&self) -> MutexGuard<'_, BTreeMap<PassengerId, PassengerState>> {
        self.states.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self, id: &PassengerId) -> Option<PassengerState> {
        self.states().get(id).copied()
    }

    /// Number of passengers currently in `state`
    pub fn count(&self, state: PassengerState) -> usize {
        self.states().values().filter(|s| **s == state).count()
    }

    /// Passengers currently in `state`, numeric ids by value
    pub fn ids_in(&self, state: PassengerState) -> Vec<PassengerId> {
        self.states()
            .iter()
            .filter(|(_, s)| **s == state)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Passengers that have not finished their trip, numeric ids by value
    pub fn unfinished(&self) -> Vec<(PassengerId, PassengerState)> {
        self.states()
            .iter()
            .filter(|(_, s)| !s.is_done())
            .map(|(id, s)| (id.clone(), *s))
            .collect()
    }

    pub fn snapshot(&self) -> BTreeMap<PassengerId, PassengerState> {
        self.states().clone()
    }
}

impl Presenter for RosterPresenter {
    fn notify(&self, event: &RideEvent) {
        if let (Some(id), Some(state)) = (event.passenger(), event.passenger_state()) {
            self.states().insert(id.clone(), state);
        }
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
