// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ride controller phases

use crate::error::CoordinationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the ride controller's cycle
///
/// ```text
/// Idle -> Boarding -> Running -> Unboarding -> Boarding -> ...
/// ```
///
/// Any phase may move to `Stopped` on shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RidePhase {
    /// Constructed, no batch opened yet
    Idle,
    /// Admission gate open, waiting for a full car
    Boarding,
    /// Car is full and the ride is in progress
    Running,
    /// Release gate open, waiting for an empty car
    Unboarding,
    /// Shut down; no further transitions
    Stopped,
}

impl RidePhase {
    pub fn can_transition_to(self, next: RidePhase) -> bool {
        use RidePhase::*;
        matches!(
            (self, next),
            (Idle, Boarding)
                | (Boarding, Running)
                | (Running, Unboarding)
                | (Unboarding, Boarding)
                | (Idle | Boarding | Running | Unboarding, Stopped)
        )
    }

    pub fn transition(self, next: RidePhase) -> Result<RidePhase, CoordinationError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoordinationError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RidePhase::Idle => "idle",
            RidePhase::Boarding => "boarding",
            RidePhase::Running => "running",
            RidePhase::Unboarding => "unboarding",
            RidePhase::Stopped => "stopped",
        }
    }
}

impl fmt::Display for RidePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
