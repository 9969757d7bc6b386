// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yare::parameterized;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[parameterized(
    range = { "500ms..1500ms", 500, 1500 },
    compound_duration = { "500ms..1s 500ms", 500, 1500 },
    fixed = { "2s", 2000, 2000 },
    padded = { " 1ms .. 3ms ", 1, 3 },
    zero = { "0s", 0, 0 },
)]
fn parses_ranges(input: &str, min: u64, max: u64) {
    let range: DelayRange = input.parse().unwrap();
    assert_eq!(range.min(), ms(min));
    assert_eq!(range.max(), ms(max));
}

#[test]
fn rejects_inverted_range() {
    let err = "2s..1s".parse::<DelayRange>().unwrap_err();
    assert_eq!(
        err,
        DelayRangeError::Inverted {
            min: ms(2000),
            max: ms(1000)
        }
    );
}

#[test]
fn rejects_garbage_duration() {
    let err = "soon..later".parse::<DelayRange>().unwrap_err();
    assert!(matches!(err, DelayRangeError::Duration { ref input, .. } if input == "soon"));
}

#[test]
fn display_uses_single_duration_when_fixed() {
    assert_eq!(DelayRange::fixed(ms(2000)).to_string(), "2s");
    assert_eq!(
        DelayRange::new(ms(500), ms(1500)).unwrap().to_string(),
        "500ms..1s 500ms"
    );
}

#[test]
fn display_output_parses_back() {
    let range = DelayRange::new(ms(500), ms(1500)).unwrap();
    assert_eq!(range.to_string().parse::<DelayRange>().unwrap(), range);
}

#[test]
fn fixed_range_always_samples_its_value() {
    let mut rng = StdRng::seed_from_u64(7);
    let range = DelayRange::fixed(ms(20));
    for _ in 0..10 {
        assert_eq!(range.sample(&mut rng), ms(20));
    }
}

proptest! {
    #[test]
    fn samples_stay_inside_range(min in 0u64..10_000, span in 0u64..10_000, seed in any::<u64>()) {
        let range = DelayRange::new(Duration::from_micros(min), Duration::from_micros(min + span)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..16 {
            prop_assert!(range.contains(range.sample(&mut rng)));
        }
    }
}
