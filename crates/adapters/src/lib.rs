// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Presenters for the ride coordinator

pub mod console;
pub mod fanout;
pub mod roster;
pub mod traced;

pub use console::ConsolePresenter;
pub use fanout::Fanout;
pub use roster::RosterPresenter;
pub use traced::TracedPresenter;
