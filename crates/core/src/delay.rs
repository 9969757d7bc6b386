// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delay ranges for simulated work
//!
//! A range is written `min..max` using humantime durations (`500ms..1500ms`),
//! or as a single duration (`2s`) for a fixed pause.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelayRangeError {
    #[error("invalid duration {input:?}: {message}")]
    Duration { input: String, message: String },
    #[error("delay minimum {min:?} exceeds maximum {max:?}")]
    Inverted { min: Duration, max: Duration },
}

/// An inclusive range of pause lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    pub const ZERO: DelayRange = DelayRange::fixed(Duration::ZERO);

    pub fn new(min: Duration, max: Duration) -> Result<Self, DelayRangeError> {
        if min > max {
            return Err(DelayRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn fixed(duration: Duration) -> Self {
        Self {
            min: duration,
            max: duration,
        }
    }

    /// Range between two millisecond counts, given in either order
    pub const fn millis(a: u64, b: u64) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, duration: Duration) -> bool {
        self.min <= duration && duration <= self.max
    }

    /// Pick a duration uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.is_fixed() {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::ZERO
    }
}

fn parse_duration(input: &str) -> Result<Duration, DelayRangeError> {
    humantime::parse_duration(input.trim()).map_err(|e| DelayRangeError::Duration {
        input: input.trim().to_string(),
        message: e.to_string(),
    })
}

impl FromStr for DelayRange {
    type Err = DelayRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once("..") {
            Some((min, max)) => DelayRange::new(parse_duration(min)?, parse_duration(max)?),
            None => Ok(DelayRange::fixed(parse_duration(s)?)),
        }
    }
}

impl fmt::Display for DelayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", humantime::format_duration(self.min))
        } else {
            write!(
                f,
                "{}..{}",
                humantime::format_duration(self.min),
                humantime::format_duration(self.max)
            )
        }
    }
}

impl TryFrom<String> for DelayRange {
    type Error = DelayRangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DelayRange> for String {
    fn from(range: DelayRange) -> Self {
        range.to_string()
    }
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
