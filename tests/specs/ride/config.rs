//! Ride configuration specs

use crate::prelude::*;

#[test]
fn config_prints_defaults() {
    coaster().args(&["config"]).passes().stdout_eq(
        "capacity = 4\n\
         passengers = 12\n\
         boarding = \"500ms..1s 500ms\"\n\
         unboarding = \"500ms..1s 500ms\"\n\
         ride = \"2s\"\n",
    );
}

#[test]
fn config_merges_file_and_flags() {
    let temp = Project::empty();
    temp.file("ride.toml", "capacity = 2\npassengers = 5\nrun_for = \"10s\"\n");

    temp.coaster()
        .args(&["config", "--config", "ride.toml", "--passengers", "6"])
        .passes()
        .stdout_has("capacity = 2\n")
        .stdout_has("passengers = 6\n")
        .stdout_has("run_for = \"10s\"\n");
}
