// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deliver each event to two presenters

use coaster_core::{Presenter, RideEvent};

/// Presenter that forwards every event to `first`, then `second`
#[derive(Clone)]
pub struct Fanout<A, B> {
    first: A,
    second: B,
}

impl<A, B> Fanout<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Presenter, B: Presenter> Presenter for Fanout<A, B> {
    fn notify(&self, event: &RideEvent) {
        self.first.notify(event);
        self.second.notify(event);
    }
}
