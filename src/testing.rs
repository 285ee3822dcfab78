// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled, hidden from documentation.

#![doc(hidden)]

use crate::exact::MatchAlgorithm;
use crate::types::{Document, ScoreCard};

/// A document with id `doc-{index}`.
pub fn make_doc(index: usize, text: &str) -> Document {
    Document::new(format!("doc-{index}"), text)
}

/// One document per text, ids `doc-0`, `doc-1`, ...
pub fn make_corpus(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_doc(i, text))
        .collect()
}

/// Every start offset of `pattern` in `text`, overlapping, found by brute force.
///
/// The reference the exact matchers are checked against.
pub fn naive_search(text: &str, pattern: &str) -> Vec<usize> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// Ids of ranked cards, in order.
pub fn result_ids(results: &[ScoreCard]) -> Vec<&str> {
    results.iter().map(|card| card.doc_id.as_str()).collect()
}

/// Offsets from both exact algorithms, asserting they agree.
pub fn search_both(text: &str, pattern: &str) -> Vec<usize> {
    let kmp = MatchAlgorithm::Kmp.search(text, pattern);
    let bm = MatchAlgorithm::BoyerMoore.search(text, pattern);
    assert_eq!(kmp, bm, "KMP and Boyer-Moore disagree on {pattern:?} in {text:?}");
    kmp
}
