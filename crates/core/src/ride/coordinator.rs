// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ride coordinator: the controller loop and the passenger protocol
//!
//! One thread calls [`Coordinator::run`]; any number of passenger threads
//! call [`Coordinator::participant`]. Both share the coordinator by
//! reference (a scoped borrow or an `Arc`).
//!
//! Each cycle the controller opens the boarding gate for exactly
//! `capacity` passengers, waits for the car to fill, rides, opens the
//! unboarding gate for the same passengers and waits for the car to empty.
//! Boarding for the next cycle never opens while anyone is still seated.
//!
//! If the passenger count is not a multiple of the capacity, the leftover
//! passengers take seats in a car that never fills and block forever. Only
//! [`Coordinator::shutdown`] releases them.

use super::passenger::PassengerId;
use super::phase::RidePhase;
use crate::clock::Clock;
use crate::config::Timings;
use crate::coordination::{BatchBarrier, Direction, Latch, Occupancy};
use crate::error::CoordinationError;
use crate::event::RideEvent;
use crate::presenter::Presenter;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, error, info};

/// Outcome of a controller loop that was shut down cleanly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed boarding/ride/unboarding cycles
    pub cycles: u64,
}

pub struct Coordinator<C: Clock, P: Presenter> {
    occupancy: Occupancy,
    boarding: BatchBarrier,
    unboarding: BatchBarrier,
    phase: Mutex<RidePhase>,
    cycles: AtomicU64,
    stop: Latch,
    fault: Mutex<Option<CoordinationError>>,
    timings: Timings,
    clock: C,
    presenter: P,
}

impl<C: Clock, P: Presenter> Coordinator<C, P> {
    pub fn new(
        capacity: usize,
        timings: Timings,
        clock: C,
        presenter: P,
    ) -> Result<Self, CoordinationError> {
        if capacity == 0 {
            return Err(CoordinationError::InvalidCapacity);
        }
        Ok(Self {
            occupancy: Occupancy::new(capacity),
            boarding: BatchBarrier::new(Direction::Boarding),
            unboarding: BatchBarrier::new(Direction::Unboarding),
            phase: Mutex::new(RidePhase::Idle),
            cycles: AtomicU64::new(0),
            stop: Latch::new(),
            fault: Mutex::new(None),
            timings,
            clock,
            presenter,
        })
    }

    pub fn capacity(&self) -> usize {
        self.occupancy.capacity()
    }

    /// Passengers currently seated
    pub fn occupancy(&self) -> usize {
        self.occupancy.current()
    }

    pub fn phase(&self) -> RidePhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Completed cycles so far
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// How many of `passengers` can never complete a trip
    pub fn stranded(&self, passengers: usize) -> usize {
        passengers % self.capacity()
    }

    pub fn is_shut_down(&self) -> bool {
        self.stop.is_set()
    }

    /// The fatal error that stopped the ride, if any
    pub fn fault(&self) -> Option<CoordinationError> {
        self.fault.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Stop the ride.
    ///
    /// Cuts short any pause in progress and closes every gate and
    /// completion signal: blocked passengers and the controller wake with
    /// [`CoordinationError::Cancelled`]. Idempotent.
    pub fn shutdown(&self) {
        if !self.stop.trigger() {
            return;
        }
        info!(
            cycles = self.cycles(),
            phase = %self.phase(),
            "shutting down ride"
        );
        self.boarding.close();
        self.unboarding.close();
    }

    /// Take one trip: wait for admission, board, wait for release, unboard.
    ///
    /// Blocks until the trip is complete. Returns `Cancelled` if the ride is
    /// shut down first.
    pub fn participant(&self, id: &PassengerId) -> Result<(), CoordinationError> {
        let capacity = self.capacity();
        self.presenter
            .notify(&RideEvent::PassengerWaiting { id: id.clone() });

        self.boarding.wait_turn()?;
        self.presenter
            .notify(&RideEvent::PassengerAdmitted { id: id.clone() });
        let crossing = self
            .boarding
            .cross_and_count(&self.occupancy, |occupancy| {
                self.presenter.notify(&RideEvent::PassengerBoarded {
                    id: id.clone(),
                    occupancy,
                    capacity,
                });
                self.clock.delay(self.timings.boarding, &self.stop);
            })
            .map_err(|e| self.fail(e))?;
        debug!(
            passenger = %id,
            occupancy = crossing.occupancy,
            last = crossing.completed,
            "boarded"
        );
        self.ensure_running()?;

        self.unboarding.wait_turn()?;
        self.presenter
            .notify(&RideEvent::PassengerReleased { id: id.clone() });
        let crossing = self
            .unboarding
            .cross_and_count(&self.occupancy, |occupancy| {
                self.clock.delay(self.timings.unboarding, &self.stop);
                self.presenter.notify(&RideEvent::PassengerUnboarded {
                    id: id.clone(),
                    occupancy,
                    capacity,
                });
            })
            .map_err(|e| self.fail(e))?;
        debug!(
            passenger = %id,
            occupancy = crossing.occupancy,
            last = crossing.completed,
            "unboarded"
        );

        Ok(())
    }

    /// Run the controller loop.
    ///
    /// Never returns until [`shutdown`](Self::shutdown) is called or an
    /// invariant is violated. A violation shuts the ride down and is
    /// returned as the error.
    pub fn run(&self) -> Result<RunSummary, CoordinationError> {
        info!(capacity = self.capacity(), "ride controller started");

        let stopped_by = loop {
            if let Err(e) = self.cycle() {
                break e;
            }
        };
        if stopped_by.is_fatal() {
            self.fail(stopped_by);
        }
        let fault = self.fault();

        {
            let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
            if let Ok(next) = phase.transition(RidePhase::Stopped) {
                *phase = next;
            }
        }
        let cycles = self.cycles();
        self.presenter.notify(&RideEvent::Stopped { cycles });

        match fault {
            Some(err) => Err(err),
            None => {
                info!(cycles, "ride controller stopped");
                Ok(RunSummary { cycles })
            }
        }
    }

    fn cycle(&self) -> Result<(), CoordinationError> {
        self.ensure_running()?;
        let cycle = self.cycles() + 1;
        let capacity = self.capacity();

        self.expect_seated(Direction::Boarding, 0)?;
        self.advance(RidePhase::Boarding)?;
        info!(cycle, "ready for boarding");
        self.presenter
            .notify(&RideEvent::BoardingOpened { cycle, capacity });
        self.boarding.open(capacity);
        self.boarding.wait_complete()?;

        self.expect_seated(Direction::Boarding, capacity)?;
        self.advance(RidePhase::Running)?;
        info!(cycle, "car full, ride starting");
        self.presenter.notify(&RideEvent::BatchFull { cycle });
        let ride_time = self.clock.delay(self.timings.ride, &self.stop);
        self.ensure_running()?;
        debug!(cycle, ride = ?ride_time, "ride finished");
        self.presenter.notify(&RideEvent::RideFinished { cycle });

        self.advance(RidePhase::Unboarding)?;
        self.presenter
            .notify(&RideEvent::UnboardingOpened { cycle, capacity });
        self.unboarding.open(capacity);
        self.unboarding.wait_complete()?;

        self.cycles.fetch_add(1, Ordering::SeqCst);
        info!(cycle, "car empty");
        self.presenter.notify(&RideEvent::BatchEmpty { cycle });
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), CoordinationError> {
        if self.is_shut_down() {
            Err(CoordinationError::Cancelled)
        } else {
            Ok(())
        }
    }

    fn expect_seated(&self, action: Direction, expected: usize) -> Result<(), CoordinationError> {
        let seated = self.occupancy.current();
        if seated == expected {
            Ok(())
        } else {
            Err(CoordinationError::InvariantViolation {
                action,
                occupancy: seated,
                capacity: self.capacity(),
            })
        }
    }

    fn advance(&self, next: RidePhase) -> Result<(), CoordinationError> {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        let from = *phase;
        *phase = from.transition(next)?;
        debug!(%from, to = %next, "phase");
        Ok(())
    }

    /// Record a fatal error and shut the ride down; shutdowns pass through
    fn fail(&self, err: CoordinationError) -> CoordinationError {
        if err.is_fatal() {
            error!(error = %err, "ride aborted");
            self.fault
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .get_or_insert_with(|| err.clone());
            self.shutdown();
        }
        err
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
