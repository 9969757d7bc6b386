//! Ride run specs
//!
//! Verify the console log of complete rides and of stranded passengers.

use crate::prelude::*;

#[test]
fn full_batches_ride_and_exit() {
    let run = coaster()
        .args(&["run", "--capacity", "4", "--passengers", "8"])
        .args(FAST)
        .passes()
        .stdout_has("Roller coaster is ready for boarding.")
        .stdout_has("Passenger 7 is waiting to board.")
        .stdout_has("Roller coaster stopped after 2 rides.");

    assert_eq!(run.stdout_count("Roller coaster is full. Starting the ride!"), 2);
    assert_eq!(
        run.stdout_count("All passengers have unboarded. Ready for the next ride!"),
        2
    );
    assert_eq!(run.stdout_count("is waiting to board."), 8);
    assert_eq!(run.stdout_count("unboarded. ("), 8);
}

#[test]
fn car_is_drawn_after_each_seat_change() {
    coaster()
        .args(&["run", "--capacity", "2", "--passengers", "2"])
        .args(FAST)
        .passes()
        .stdout_has("boarded. (1/2)\n🎢🚶 _🎢\n")
        .stdout_has("boarded. (2/2)\n🎢🚶🚶🎢\n")
        .stdout_has("🎢 _🚶🎢\n")
        .stdout_has("unboarded. (2/2)\n");
}

#[test]
fn no_passengers_means_no_rides() {
    coaster()
        .args(&["run", "--passengers", "0"])
        .args(FAST)
        .passes()
        .stdout_lacks("Starting the ride!")
        .stdout_has("Roller coaster stopped after 0 rides.");
}

#[test]
fn leftover_passengers_are_warned_and_reported() {
    coaster()
        .args(&["run", "--capacity", "3", "--passengers", "4", "--run-for", "2s"])
        .args(FAST)
        .passes()
        .stderr_has("warning: 1 of 4 passengers can never complete a ride")
        .stderr_has("1 passengers never finished:")
        .stderr_has("(held)")
        .stdout_has("Roller coaster stopped after 1 rides.");
}
