//! CLI help specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    coaster()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn run_help_lists_ride_flags() {
    coaster()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--capacity")
        .stdout_has("--passengers")
        .stdout_has("--run-for");
}
