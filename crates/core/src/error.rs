// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ride coordination

use crate::coordination::Direction;
use crate::ride::RidePhase;
use thiserror::Error;

/// Errors that can occur while coordinating a ride
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinationError {
    /// A ride needs at least one seat
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
    /// Occupancy escaped `[0, capacity]`; this is a locking bug, never recoverable
    #[error("occupancy invariant violated while {action}: occupancy {occupancy}, capacity {capacity}")]
    InvariantViolation {
        action: Direction,
        occupancy: usize,
        capacity: usize,
    },
    #[error("illegal ride transition from {from} to {to}")]
    IllegalTransition { from: RidePhase, to: RidePhase },
    /// The coordinator was shut down while the caller was waiting
    #[error("coordinator shut down")]
    Cancelled,
}

impl CoordinationError {
    /// Whether this error means a correctness defect rather than a shutdown
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CoordinationError::Cancelled)
    }
}
