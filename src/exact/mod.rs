// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring search.
//!
//! Two interchangeable algorithms behind one closed enum. They return the same
//! offsets for every input; they only differ in how fast they get there.
//! KMP has a flat O(n + m) profile, Boyer-Moore skips ahead on long patterns
//! over varied text.
//!
//! Case folding is the caller's job. The orchestrator normalizes both sides
//! before anything reaches this module.

mod boyer_moore;
mod kmp;

pub use boyer_moore::{
    bad_character_table, boyer_moore_search, boyer_moore_search_bytes, good_suffix_table,
};
pub use kmp::{kmp_search, kmp_search_bytes, prefix_table};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::contracts::check_exact_offsets;

/// Which exact matcher runs before the fuzzy fallback.
///
/// Chosen once per search call and passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchAlgorithm {
    #[default]
    Kmp,
    BoyerMoore,
}

impl MatchAlgorithm {
    pub const ALL: [MatchAlgorithm; 2] = [MatchAlgorithm::Kmp, MatchAlgorithm::BoyerMoore];

    /// Start offsets of every occurrence of `pattern` in `text`, ascending.
    pub fn search(self, text: &str, pattern: &str) -> Vec<usize> {
        let offsets = match self {
            MatchAlgorithm::Kmp => kmp_search(text, pattern),
            MatchAlgorithm::BoyerMoore => boyer_moore_search(text, pattern),
        };
        check_exact_offsets(text, pattern, &offsets);
        offsets
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchAlgorithm::Kmp => "KMP",
            MatchAlgorithm::BoyerMoore => "Boyer-Moore",
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match algorithm '{0}' (expected 'kmp' or 'boyer-moore')")]
pub struct ParseAlgorithmError(String);

impl FromStr for MatchAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmp" => Ok(MatchAlgorithm::Kmp),
            "boyer-moore" | "boyermoore" | "boyer_moore" | "bm" => Ok(MatchAlgorithm::BoyerMoore),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
