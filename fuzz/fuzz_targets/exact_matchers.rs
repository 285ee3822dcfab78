// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the exact matchers.
//!
//! KMP, Boyer-Moore, and brute force must report the same offsets for any
//! text and pattern, including invalid UTF-8 at the byte level.

#![no_main]

use arbitrary::Arbitrary;
use keyscan::exact::{boyer_moore_search_bytes, kmp_search_bytes};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ExactInput {
    text: Vec<u8>,
    /// Kept short so repeats inside `text` are likely.
    pattern: Vec<u8>,
}

fn brute_force(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

fuzz_target!(|input: ExactInput| {
    let pattern = &input.pattern[..input.pattern.len().min(8)];
    let text = &input.text[..input.text.len().min(4096)];

    let kmp = kmp_search_bytes(text, pattern);
    let bm = boyer_moore_search_bytes(text, pattern);

    assert_eq!(kmp, bm, "KMP and Boyer-Moore disagree on pattern {:?}", pattern);
    assert_eq!(kmp, brute_force(text, pattern), "matchers missed or invented offsets");
});
