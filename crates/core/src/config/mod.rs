// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod ride;

pub use ride::{ConfigError, RideConfig, Timings};
