// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seat counter shared by the boarding and unboarding barriers

use std::sync::{Mutex, MutexGuard};

/// Number of seats taken, guarded by the single ride lock
#[derive(Debug)]
pub struct Occupancy {
    capacity: usize,
    seated: Mutex<usize>,
}

impl Occupancy {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            seated: Mutex::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the seat count; blocks while a crossing holds the lock
    pub fn current(&self) -> usize {
        *self.lock()
    }

    pub fn is_full(&self) -> bool {
        self.current() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.current() == 0
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, usize> {
        self.seated.lock().unwrap_or_else(|e| e.into_inner())
    }
}
