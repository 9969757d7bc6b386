// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::thread;

#[test]
fn system_clock_returns_increasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 > t1);
}

#[test]
fn system_clock_delay_sleeps_within_range() {
    let clock = SystemClock;
    let range = DelayRange::new(Duration::from_millis(2), Duration::from_millis(4)).unwrap();

    let start = Instant::now();
    let chosen = clock.delay(range, &Latch::new());

    assert!(range.contains(chosen));
    assert!(start.elapsed() >= chosen);
}

#[test]
fn system_clock_zero_delay_returns_immediately() {
    let clock = SystemClock;
    assert_eq!(clock.delay(DelayRange::ZERO, &Latch::new()), Duration::ZERO);
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance(Duration::from_secs(60));
    let t2 = clock.now();
    assert!(t2.duration_since(t1) >= Duration::from_secs(60));
}

#[test]
fn fake_clock_delay_advances_by_range_minimum() {
    let clock = FakeClock::new();
    let range = DelayRange::new(Duration::from_millis(500), Duration::from_millis(1500)).unwrap();

    let t1 = clock.now();
    let chosen = clock.delay(range, &Latch::new());

    assert_eq!(chosen, Duration::from_millis(500));
    assert_eq!(clock.now().duration_since(t1), Duration::from_millis(500));
    assert_eq!(clock.delays(), vec![range]);
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    clock2.delay(DelayRange::fixed(Duration::from_secs(2)), &Latch::new());
    let t2 = clock1.now();
    assert!(t2.duration_since(t1) >= Duration::from_secs(32));
    assert_eq!(clock1.delays().len(), 1);
}

#[test]
fn system_clock_delay_ends_when_stopped() {
    let clock = SystemClock;
    let stop = Latch::new();

    thread::scope(|s| {
        let sleeper = s.spawn(|| clock.delay(DelayRange::fixed(Duration::from_secs(10)), &stop));
        thread::sleep(Duration::from_millis(20));

        let start = Instant::now();
        stop.trigger();
        let paused = sleeper.join().unwrap();

        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(paused < Duration::from_secs(10));
    });
}

#[test]
fn fake_clock_stands_still_once_stopped() {
    let clock = FakeClock::new();
    let stop = Latch::new();
    stop.trigger();

    let t1 = clock.now();
    let paused = clock.delay(DelayRange::fixed(Duration::from_secs(2)), &stop);

    assert_eq!(paused, Duration::ZERO);
    assert_eq!(clock.now(), t1);
    assert_eq!(clock.delays().len(), 1);
}
