// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ride settings shared by every subcommand: a config file plus flag overrides

use anyhow::{Context, Result};
use clap::Args;
use coaster_core::{DelayRange, RideConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub struct RideArgs {
    /// TOML ride configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Seats in the car
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Number of passenger threads
    #[arg(long)]
    pub passengers: Option<usize>,

    /// Time each passenger takes to board (e.g. "500ms..1500ms")
    #[arg(long)]
    pub boarding: Option<DelayRange>,

    /// Time each passenger takes to unboard
    #[arg(long)]
    pub unboarding: Option<DelayRange>,

    /// Length of the ride itself
    #[arg(long)]
    pub ride: Option<DelayRange>,

    /// Stop the ride after this long (e.g. "30s")
    #[arg(long, value_parser = humantime::parse_duration)]
    pub run_for: Option<Duration>,
}

impl RideArgs {
    /// Load the config file (or defaults), then apply flag overrides
    pub fn resolve(&self) -> Result<RideConfig> {
        let mut config = match &self.config {
            Some(path) => RideConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RideConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(passengers) = self.passengers {
            config.passengers = passengers;
        }
        if let Some(boarding) = self.boarding {
            config.boarding = boarding;
        }
        if let Some(unboarding) = self.unboarding {
            config.unboarding = unboarding;
        }
        if let Some(ride) = self.ride {
            config.ride = ride;
        }
        if self.run_for.is_some() {
            config.run_for = self.run_for;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
