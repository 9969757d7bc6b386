// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ride events delivered to presenters

use crate::ride::{PassengerId, PassengerState};

/// State changes reported while the ride runs
///
/// Controller events carry the 1-based `cycle` they belong to. Passenger
/// seat events carry the seat count right after the passenger moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideEvent {
    // Controller events
    BoardingOpened { cycle: u64, capacity: usize },
    BatchFull { cycle: u64 },
    RideFinished { cycle: u64 },
    UnboardingOpened { cycle: u64, capacity: usize },
    BatchEmpty { cycle: u64 },
    Stopped { cycles: u64 },

    // Passenger events
    PassengerWaiting { id: PassengerId },
    PassengerAdmitted { id: PassengerId },
    PassengerBoarded {
        id: PassengerId,
        occupancy: usize,
        capacity: usize,
    },
    PassengerReleased { id: PassengerId },
    PassengerUnboarded {
        id: PassengerId,
        occupancy: usize,
        capacity: usize,
    },
}

impl RideEvent {
    /// Stable event name, `subject:verb`
    pub fn name(&self) -> &'static str {
        match self {
            RideEvent::BoardingOpened { .. } => "boarding:opened",
            RideEvent::BatchFull { .. } => "batch:full",
            RideEvent::RideFinished { .. } => "ride:finished",
            RideEvent::UnboardingOpened { .. } => "unboarding:opened",
            RideEvent::BatchEmpty { .. } => "batch:empty",
            RideEvent::Stopped { .. } => "ride:stopped",
            RideEvent::PassengerWaiting { .. } => "passenger:waiting",
            RideEvent::PassengerAdmitted { .. } => "passenger:admitted",
            RideEvent::PassengerBoarded { .. } => "passenger:boarded",
            RideEvent::PassengerReleased { .. } => "passenger:released",
            RideEvent::PassengerUnboarded { .. } => "passenger:unboarded",
        }
    }

    pub fn passenger(&self) -> Option<&PassengerId> {
        match self {
            RideEvent::PassengerWaiting { id }
            | RideEvent::PassengerAdmitted { id }
            | RideEvent::PassengerBoarded { id, .. }
            | RideEvent::PassengerReleased { id }
            | RideEvent::PassengerUnboarded { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The passenger state this event moves its passenger into
    pub fn passenger_state(&self) -> Option<PassengerState> {
        match self {
            RideEvent::PassengerWaiting { .. } => Some(PassengerState::Waiting),
            RideEvent::PassengerAdmitted { .. } => Some(PassengerState::Admitted),
            RideEvent::PassengerBoarded { .. } => Some(PassengerState::Held),
            RideEvent::PassengerReleased { .. } => Some(PassengerState::Released),
            RideEvent::PassengerUnboarded { .. } => Some(PassengerState::Done),
            _ => None,
        }
    }

    pub fn cycle(&self) -> Option<u64> {
        match self {
            RideEvent::BoardingOpened { cycle, .. }
            | RideEvent::BatchFull { cycle }
            | RideEvent::RideFinished { cycle }
            | RideEvent::UnboardingOpened { cycle, .. }
            | RideEvent::BatchEmpty { cycle } => Some(*cycle),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
