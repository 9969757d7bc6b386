// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ride configuration
//!
//! Loaded from TOML. Every field is optional and falls back to the
//! defaults of the classic simulation: a four-seat car, twelve passengers,
//! 0.5–1.5s to take or leave a seat and a two second ride.
//!
//! ```toml
//! capacity = 4
//! passengers = 12
//! run_for = "30s"
//! boarding = "500ms..1500ms"
//! unboarding = "500ms..1500ms"
//! ride = "2s"
//! ```

use crate::delay::DelayRange;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
}

/// Pause lengths handed to the clock at each step of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Time a passenger spends taking a seat, under the ride lock
    pub boarding: DelayRange,
    /// Time a passenger spends leaving a seat, under the ride lock
    pub unboarding: DelayRange,
    /// Length of the ride itself
    pub ride: DelayRange,
}

impl Timings {
    /// No pauses at all
    pub const fn instant() -> Self {
        Self {
            boarding: DelayRange::ZERO,
            unboarding: DelayRange::ZERO,
            ride: DelayRange::ZERO,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            boarding: DelayRange::millis(500, 1500),
            unboarding: DelayRange::millis(500, 1500),
            ride: DelayRange::millis(2000, 2000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RideConfig {
    /// Seats in the car; every cycle admits exactly this many passengers
    pub capacity: usize,
    /// Passenger threads to start
    pub passengers: usize,
    /// Shut down after this long, if set
    #[serde(with = "humantime_serde::option", skip_serializing_if = "Option::is_none")]
    pub run_for: Option<Duration>,
    pub boarding: DelayRange,
    pub unboarding: DelayRange,
    pub ride: DelayRange,
}

impl Default for RideConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            capacity: 4,
            passengers: 12,
            run_for: None,
            boarding: timings.boarding,
            unboarding: timings.unboarding,
            ride: timings.ride,
        }
    }
}

impl RideConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: RideConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }

    pub fn timings(&self) -> Timings {
        Timings {
            boarding: self.boarding,
            unboarding: self.unboarding,
            ride: self.ride,
        }
    }

    /// Passengers left over once every full car has been filled
    ///
    /// These passengers never finish: the car only leaves when full.
    pub fn stranded(&self) -> usize {
        self.passengers.checked_rem(self.capacity).unwrap_or(0)
    }

    /// Number of complete rides the passenger count allows
    pub fn full_rides(&self) -> usize {
        self.passengers.checked_div(self.capacity).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "ride_tests.rs"]
mod tests;
