// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;
use yare::parameterized;

#[test]
fn empty_document_uses_defaults() {
    let config = RideConfig::from_toml_str("").unwrap();
    assert_eq!(config, RideConfig::default());
    assert_eq!(config.capacity, 4);
    assert_eq!(config.passengers, 12);
    assert_eq!(config.run_for, None);
    assert_eq!(config.timings(), Timings::default());
}

#[test]
fn default_timings_match_classic_simulation() {
    let timings = Timings::default();
    assert_eq!(timings.boarding.min(), Duration::from_millis(500));
    assert_eq!(timings.boarding.max(), Duration::from_millis(1500));
    assert_eq!(timings.ride, DelayRange::fixed(Duration::from_secs(2)));
}

#[test]
fn parses_every_field() {
    let config = RideConfig::from_toml_str(
        r#"
        capacity = 3
        passengers = 9
        run_for = "10s"
        boarding = "1ms..2ms"
        unboarding = "3ms"
        ride = "5ms..10ms"
        "#,
    )
    .unwrap();

    assert_eq!(config.capacity, 3);
    assert_eq!(config.passengers, 9);
    assert_eq!(config.run_for, Some(Duration::from_secs(10)));
    assert_eq!(config.boarding, DelayRange::millis(1, 2));
    assert_eq!(config.unboarding, DelayRange::millis(3, 3));
    assert_eq!(config.ride, DelayRange::millis(5, 10));
}

#[test]
fn rejects_zero_capacity() {
    let err = RideConfig::from_toml_str("capacity = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidCapacity));
}

#[test]
fn rejects_inverted_delay() {
    let err = RideConfig::from_toml_str(r#"ride = "2s..1s""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("exceeds maximum"));
}

#[test]
fn rejects_unknown_fields() {
    let err = RideConfig::from_toml_str("seats = 4").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn rendered_toml_loads_back() {
    let config = RideConfig {
        run_for: Some(Duration::from_secs(30)),
        ..RideConfig::default()
    };
    let rendered = config.to_toml().unwrap();

    assert!(rendered.contains("capacity = 4"));
    assert!(rendered.contains("run_for = \"30s\""));
    assert_eq!(RideConfig::from_toml_str(&rendered).unwrap(), config);
}

#[test]
fn run_for_is_omitted_when_unset() {
    let rendered = RideConfig::default().to_toml().unwrap();
    assert!(!rendered.contains("run_for"));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "capacity = 2\npassengers = 6").unwrap();

    let config = RideConfig::load(file.path()).unwrap();
    assert_eq!(config.capacity, 2);
    assert_eq!(config.full_rides(), 3);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = RideConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[parameterized(
    exact_multiple = { 4, 12, 3, 0 },
    one_left_over = { 3, 10, 3, 1 },
    fewer_than_a_car = { 4, 3, 0, 3 },
    no_passengers = { 4, 0, 0, 0 },
)]
fn full_rides_and_stranded(capacity: usize, passengers: usize, rides: usize, stranded: usize) {
    let config = RideConfig {
        capacity,
        passengers,
        ..RideConfig::default()
    };
    assert_eq!(config.full_rides(), rides);
    assert_eq!(config.stranded(), stranded);
}
