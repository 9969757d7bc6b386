// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console presenter
//!
//! Renders ride events as a line-per-event log with a small drawing of the
//! car after every seat change:
//!
//! ```text
//! Passenger 3 boarded. (2/4)
//! 🎢🚶🚶 _ _🎢
//! ```

use coaster_core::{Direction, Presenter, RideEvent};
use std::io::Write;
use std::sync::{Arc, Mutex};

const RAIL: &str = "🎢";
const SEATED: &str = "🚶";
const EMPTY: &str = " _";

/// Presenter that writes human-readable lines to a writer (stdout by default)
#[derive(Clone)]
pub struct ConsolePresenter {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
    draw_car: bool,
}

impl ConsolePresenter {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
            draw_car: true,
        }
    }

    /// Skip the car drawing, keeping only the text lines
    pub fn without_car(mut self) -> Self {
        self.draw_car = false;
        self
    }
}

/// Draw the car with `occupancy` of `capacity` seats taken.
///
/// Boarding fills seats from the front, unboarding empties them from the front.
pub fn car_line(occupancy: usize, capacity: usize, direction: Direction) -> String {
    let empty = capacity.saturating_sub(occupancy);
    let (first, second) = match direction {
        Direction::Boarding => (SEATED.repeat(occupancy), EMPTY.repeat(empty)),
        Direction::Unboarding => (EMPTY.repeat(empty), SEATED.repeat(occupancy)),
    };
    format!("{RAIL}{first}{second}{RAIL}")
}

/// Lines printed for an event; empty for events the console stays quiet about
pub fn render(event: &RideEvent, draw_car: bool) -> Vec<String> {
    let mut lines = Vec::new();
    match event {
        RideEvent::BoardingOpened { .. } => {
            lines.push("Roller coaster is ready for boarding.".to_string());
        }
        RideEvent::PassengerWaiting { id } => {
            lines.push(format!("Passenger {id} is waiting to board."));
        }
        RideEvent::PassengerBoarded {
            id,
            occupancy,
            capacity,
        } => {
            lines.push(format!("Passenger {id} boarded. ({occupancy}/{capacity})"));
            if draw_car {
                lines.push(car_line(*occupancy, *capacity, Direction::Boarding));
            }
        }
        RideEvent::BatchFull { .. } => {
            lines.push("Roller coaster is full. Starting the ride!".to_string());
            lines.push("Roller coaster is running...".to_string());
        }
        RideEvent::RideFinished { .. } => {
            lines.push("Roller coaster ride finished.".to_string());
        }
        RideEvent::PassengerUnboarded {
            id,
            occupancy,
            capacity,
        } => {
            if draw_car {
                lines.push(car_line(*occupancy, *capacity, Direction::Unboarding));
            }
            let off = capacity.saturating_sub(*occupancy);
            lines.push(format!("Passenger {id} unboarded. ({off}/{capacity})"));
        }
        RideEvent::BatchEmpty { .. } => {
            lines.push("All passengers have unboarded. Ready for the next ride!".to_string());
        }
        RideEvent::Stopped { cycles } => {
            lines.push(format!("Roller coaster stopped after {cycles} rides."));
        }
        RideEvent::PassengerAdmitted { .. }
        | RideEvent::PassengerReleased { .. }
        | RideEvent::UnboardingOpened { .. } => {}
    }
    lines
}

impl Presenter for ConsolePresenter {
    fn notify(&self, event: &RideEvent) {
        let lines = render(event, self.draw_car);
        if lines.is_empty() {
            return;
        }

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{line}"))
            .and_then(|()| out.flush());
        if let Err(e) = result {
            tracing::warn!(event = event.name(), error = %e, "console write failed");
        }
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
