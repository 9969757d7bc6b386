// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking coordination primitives for batched rides
//!
//! This module provides:
//! - **Gate** - Counting signal that admits a bounded number of callers per opening
//! - **Signal** - Completion signal a single waiter blocks on
//! - **Latch** - One-shot stop flag that cuts timed pauses short
//! - **Occupancy** - Mutex-guarded seat counter with a fixed capacity
//! - **BatchBarrier** - Gate, occupancy and completion signal composed into one checkpoint

pub mod barrier;
pub mod gate;
pub mod latch;
pub mod occupancy;
pub mod signal;

pub use barrier::{BatchBarrier, Crossing, Direction};
pub use gate::Gate;
pub use latch::Latch;
pub use occupancy::Occupancy;
pub use signal::Signal;
