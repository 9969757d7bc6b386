// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! coaster-core: batched ride coordination
//!
//! This crate provides:
//! - Blocking gates, completion signals and batch barriers
//! - The ride coordinator: a controller loop and the passenger protocol
//! - Clock and presenter traits for the coordinator's collaborators
//! - TOML ride configuration

pub mod clock;
pub mod config;
pub mod coordination;
pub mod delay;
pub mod error;
pub mod event;
pub mod id;
pub mod presenter;
pub mod ride;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, RideConfig, Timings};
pub use coordination::{BatchBarrier, Crossing, Direction, Gate, Latch, Occupancy, Signal};
pub use delay::{DelayRange, DelayRangeError};
pub use error::CoordinationError;
pub use event::RideEvent;
pub use id::{IdGen, SequentialIdGen};
pub use presenter::{NoOpPresenter, Presenter};
pub use ride::{Coordinator, PassengerId, PassengerState, RidePhase, RunSummary};

#[cfg(any(test, feature = "test-support"))]
pub use presenter::FakePresenter;
