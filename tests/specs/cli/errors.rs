//! CLI error specs

use crate::prelude::*;

#[test]
fn zero_capacity_is_rejected() {
    coaster()
        .args(&["run", "--capacity", "0"])
        .fails()
        .stderr_has("capacity");
}

#[test]
fn inverted_delay_range_is_rejected() {
    coaster()
        .args(&["run", "--boarding", "2s..1s"])
        .fails()
        .stderr_has("--boarding");
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("ride.toml", "seats = 4\n");

    temp.coaster()
        .args(&["config", "--config", "ride.toml"])
        .fails()
        .stderr_has("ride.toml");
}
