// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Passenger ID generation

use crate::ride::PassengerId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generates unique passenger identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> PassengerId;
}

/// Sequential ID generator
///
/// With a prefix, IDs look like `p-1`, `p-2`, ...; without one they are
/// plain numbers starting at zero, matching passenger seat numbering.
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: Option<String>,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Bare numeric IDs starting at zero
    pub fn numbered() -> Self {
        Self {
            prefix: None,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::numbered()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> PassengerId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        match &self.prefix {
            Some(prefix) => PassengerId(format!("{}-{}", prefix, n)),
            None => PassengerId(n.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
