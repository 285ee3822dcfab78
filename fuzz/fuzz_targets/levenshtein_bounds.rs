// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded variant must agree with the full computation, and the
//! similarity built on it must stay inside [0, 1].

#![no_main]

use arbitrary::Arbitrary;
use keyscan::fuzzy::{levenshtein_bounded, levenshtein_distance, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

/// First `n` chars of `s`.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fuzz_target!(|input: DistanceInput| {
    let a = prefix(&input.a, 64);
    let b = prefix(&input.b, 64);
    let max = usize::from(input.max % 16);

    let distance = levenshtein_distance(a, b);
    assert_eq!(distance, levenshtein_distance(b, a), "distance not symmetric");

    let len_diff = a.chars().count().abs_diff(b.chars().count());
    assert!(len_diff <= distance, "distance {} below length difference {}", distance, len_diff);

    let bounded = levenshtein_bounded(a, b, max);
    if distance <= max {
        assert_eq!(bounded, Some(distance));
    } else {
        assert_eq!(bounded, None);
    }

    let sim = similarity(a, b);
    assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
});
