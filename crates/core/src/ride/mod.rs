// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The ride: controller phases, passenger lifecycle and the coordinator tying them together

mod coordinator;
mod passenger;
mod phase;

pub use coordinator::{Coordinator, RunSummary};
pub use passenger::{PassengerId, PassengerState};
pub use phase::RidePhase;
