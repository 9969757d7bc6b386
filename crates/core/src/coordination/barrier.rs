// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch barrier: one checkpoint that exactly `capacity` callers cross
//!
//! A ride uses two barriers over the same [`Occupancy`]: a boarding barrier
//! that counts seats up to capacity and an unboarding barrier that counts
//! them back down to zero. Whoever makes the count reach the barrier's
//! threshold posts the completion signal the controller is waiting on.
//!
//! The occupancy lock is held for the whole crossing, including the
//! caller's work, so only one passenger moves through the doorway at a
//! time and the count and the completion post change together.

use super::gate::Gate;
use super::occupancy::Occupancy;
use super::signal::Signal;
use crate::error::CoordinationError;
use std::fmt;

/// Which way a barrier moves the seat count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Boarding,
    Unboarding,
}

impl Direction {
    /// Seat count after one more crossing, or `None` if it would leave `[0, capacity]`
    pub fn step(self, seated: usize, capacity: usize) -> Option<usize> {
        match self {
            Direction::Boarding => (seated < capacity).then_some(seated + 1),
            Direction::Unboarding if seated <= capacity => seated.checked_sub(1),
            Direction::Unboarding => None,
        }
    }

    /// Seat count at which a batch is complete
    pub fn threshold(self, capacity: usize) -> usize {
        match self {
            Direction::Boarding => capacity,
            Direction::Unboarding => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Boarding => write!(f, "boarding"),
            Direction::Unboarding => write!(f, "unboarding"),
        }
    }
}

/// Result of one crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// Seat count right after this crossing
    pub occupancy: usize,
    /// Whether this crossing completed the batch
    pub completed: bool,
}

#[derive(Debug)]
pub struct BatchBarrier {
    direction: Direction,
    gate: Gate,
    completion: Signal,
}

impl BatchBarrier {
    pub fn new(direction: Direction) -> Self {
        let (gate, completion) = match direction {
            Direction::Boarding => (Gate::new("boarding"), Signal::new("all-aboard")),
            Direction::Unboarding => (Gate::new("unboarding"), Signal::new("all-ashore")),
        };
        Self {
            direction,
            gate,
            completion,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Let `n` more callers through [`wait_turn`](Self::wait_turn)
    pub fn open(&self, n: usize) {
        self.gate.open(n);
    }

    /// Block until this caller is let through the gate
    pub fn wait_turn(&self) -> Result<(), CoordinationError> {
        self.gate.acquire()
    }

    /// Move the seat count one step while holding the ride lock.
    ///
    /// `work` runs under the lock with the new seat count. If this crossing
    /// reaches the threshold the completion signal is posted before the lock
    /// is released.
    pub fn cross_and_count<F>(
        &self,
        occupancy: &Occupancy,
        work: F,
    ) -> Result<Crossing, CoordinationError>
    where
        F: FnOnce(usize),
    {
        let capacity = occupancy.capacity();
        let mut seated = occupancy.lock();

        let next = self.direction.step(*seated, capacity).ok_or(
            CoordinationError::InvariantViolation {
                action: self.direction,
                occupancy: *seated,
                capacity,
            },
        )?;
        *seated = next;

        work(next);

        let completed = next == self.direction.threshold(capacity);
        if completed {
            self.completion.post();
        }
        drop(seated);

        Ok(Crossing {
            occupancy: next,
            completed,
        })
    }

    /// Block until a crossing completes the batch
    pub fn wait_complete(&self) -> Result<(), CoordinationError> {
        self.completion.wait()
    }

    /// Units issued to the gate but not yet taken
    pub fn pending_turns(&self) -> usize {
        self.gate.available()
    }

    /// Wake every blocked caller; completed batches are still reported
    pub fn close(&self) {
        self.gate.close();
        self.completion.close();
    }
}

#[cfg(test)]
#[path = "barrier_tests.rs"]
mod tests;
