// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `coaster run` - Run the ride with one thread per passenger

use crate::args::RideArgs;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use coaster_adapters::{ConsolePresenter, Fanout, RosterPresenter, TracedPresenter};
use coaster_core::{
    CoordinationError, Coordinator, IdGen, RideConfig, SequentialIdGen, SystemClock,
};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

type Ride = Coordinator<SystemClock, TracedPresenter<Fanout<ConsolePresenter, RosterPresenter>>>;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub ride: RideArgs,
}

pub fn handle(args: RunArgs) -> Result<()> {
    let config = args.ride.resolve()?;
    warn_stranded(&config);

    let roster = RosterPresenter::new();
    let presenter = TracedPresenter::new(Fanout::new(ConsolePresenter::stdout(), roster.clone()));
    let ride: Arc<Ride> = Arc::new(Coordinator::new(
        config.capacity,
        config.timings(),
        SystemClock,
        presenter,
    )?);

    let r = Arc::clone(&ride);
    ctrlc::set_handler(move || {
        eprintln!("\nStopping the ride...");
        r.shutdown();
    })?;

    if let Some(limit) = config.run_for {
        let r = Arc::clone(&ride);
        thread::Builder::new()
            .name("run-for".to_string())
            .spawn(move || {
                thread::sleep(limit);
                tracing::info!(limit = ?limit, "run time elapsed");
                r.shutdown();
            })
            .context("spawning run-for timer")?;
    }

    let r = Arc::clone(&ride);
    let controller = thread::Builder::new()
        .name("controller".to_string())
        .spawn(move || r.run())
        .context("spawning controller")?;

    let (done_tx, done_rx) = mpsc::channel();
    let ids = SequentialIdGen::numbered();
    let mut passengers = Vec::with_capacity(config.passengers);
    for _ in 0..config.passengers {
        let id = ids.next();
        let r = Arc::clone(&ride);
        let done = done_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("passenger-{id}"))
            .spawn(move || {
                let result = r.participant(&id);
                let _ = done.send((id, result));
            })
            .context("spawning passenger")?;
        passengers.push(handle);
    }
    drop(done_tx);

    // Ends once every passenger has finished or been cancelled
    let mut finished = 0;
    for (id, result) in done_rx {
        match result {
            Ok(()) => finished += 1,
            Err(CoordinationError::Cancelled) => tracing::debug!(passenger = %id, "cancelled"),
            Err(e) => tracing::warn!(passenger = %id, error = %e, "passenger failed"),
        }
    }
    tracing::info!(finished, total = config.passengers, "all passengers settled");
    ride.shutdown();

    for handle in passengers {
        handle
            .join()
            .map_err(|_| anyhow!("passenger thread panicked"))?;
    }
    let summary = controller
        .join()
        .map_err(|_| anyhow!("controller thread panicked"))??;

    report_stranded(&roster);
    tracing::info!(cycles = summary.cycles, finished, "ride complete");
    Ok(())
}

fn warn_stranded(config: &RideConfig) {
    let stranded = config.stranded();
    if stranded == 0 {
        return;
    }
    tracing::warn!(
        capacity = config.capacity,
        passengers = config.passengers,
        stranded,
        "passenger count is not a multiple of capacity"
    );
    let until = match config.run_for {
        Some(limit) => format!("for {}", humantime::format_duration(limit)),
        None => "until interrupted".to_string(),
    };
    eprintln!(
        "warning: {stranded} of {} passengers can never complete a ride with capacity {}; \
         they will wait {until}",
        config.passengers, config.capacity
    );
}

fn report_stranded(roster: &RosterPresenter) {
    let unfinished = roster.unfinished();
    if unfinished.is_empty() {
        return;
    }
    let list: Vec<String> = unfinished
        .iter()
        .map(|(id, state)| format!("{id} ({state})"))
        .collect();
    eprintln!(
        "{} passengers never finished: {}",
        unfinished.len(),
        list.join(", ")
    );
}

