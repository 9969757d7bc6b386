// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger identity and lifecycle

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Opaque passenger identifier, used for observability only
///
/// Ordered so that numeric ids sort by value (`2` before `10`) and come
/// before any non-numeric id, which sort as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub String);

impl PassengerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn sort_key(&self) -> (bool, u64, &str) {
        match self.0.parse::<u64>() {
            Ok(n) => (false, n, &self.0),
            Err(_) => (true, 0, &self.0),
        }
    }
}

impl Ord for PassengerId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for PassengerId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PassengerId {
    fn from(s: String) -> Self {
        PassengerId(s)
    }
}

impl From<&str> for PassengerId {
    fn from(s: &str) -> Self {
        PassengerId(s.to_string())
    }
}

/// Where a passenger is in one trip through the ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassengerState {
    /// Queued for the admission gate
    Waiting,
    /// Through the admission gate, not yet seated
    Admitted,
    /// Seated in the car
    Held,
    /// Through the release gate, not yet off the car
    Released,
    /// Off the car; trip complete
    Done,
}

impl PassengerState {
    pub const ALL: [PassengerState; 5] = [
        PassengerState::Waiting,
        PassengerState::Admitted,
        PassengerState::Held,
        PassengerState::Released,
        PassengerState::Done,
    ];

    pub fn is_done(self) -> bool {
        self == PassengerState::Done
    }

    pub fn name(self) -> &'static str {
        match self {
            PassengerState::Waiting => "waiting",
            PassengerState::Admitted => "admitted",
            PassengerState::Held => "held",
            PassengerState::Released => "released",
            PassengerState::Done => "done",
        }
    }
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "passenger_tests.rs"]
mod tests;
