// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the whole search call.
//!
//! Arbitrary corpora and keywords must never make `search` panic, never make
//! it skip a document, and never produce a malformed ranking.

#![no_main]

use arbitrary::Arbitrary;
use keyscan::{search, Document, MatchAlgorithm, SearchError, SearchOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    texts: Vec<String>,
    keywords: Vec<String>,
    boyer_moore: bool,
    threshold_percent: u8,
    limit: u8,
}

fuzz_target!(|input: SearchInput| {
    let corpus: Vec<Document> = input
        .texts
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, text)| Document::new(i.to_string(), text))
        .collect();
    let keywords: Vec<String> = input.keywords.into_iter().take(6).collect();

    let algorithm = if input.boyer_moore {
        MatchAlgorithm::BoyerMoore
    } else {
        MatchAlgorithm::Kmp
    };
    let options = SearchOptions::default()
        .with_algorithm(algorithm)
        .with_fuzzy_threshold(f64::from(input.threshold_percent.min(100)) / 100.0)
        .with_result_limit(usize::from(input.limit));

    match search(&corpus, &keywords, &options) {
        Ok(report) => {
            assert!(report.skipped.is_empty(), "documents skipped: {:?}", report.skipped);
            assert!(report.results.len() <= usize::from(input.limit));
            for pair in report.results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
            assert!(report.results.iter().all(|card| card.score > 0.0));
        }
        Err(SearchError::InvalidQuery(_)) => {}
    }
});
