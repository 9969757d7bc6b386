// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `coaster config` - Print the effective ride configuration

use crate::args::RideArgs;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub ride: RideArgs,
}

pub fn handle(args: ConfigArgs) -> Result<()> {
    let config = args.ride.resolve()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
