// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Only a rejected query stops a search. A document that faults is skipped and
//! reported alongside the results, and degenerate input (empty pattern, empty
//! corpus, nothing matching) is just an empty result.

use std::path::PathBuf;
use thiserror::Error;

/// Why a search call returned no result at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),
}

/// The query or its options can't be evaluated. Raised before any scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidQuery {
    #[error("no keywords left after trimming")]
    NoKeywords,
    #[error("result limit must be a positive integer")]
    ZeroLimit,
    #[error("fuzzy threshold {0} is outside [0.0, 1.0]")]
    ThresholdOutOfRange(f64),
    #[error("fuzzy discount {0} must be finite and non-negative")]
    InvalidFuzzyDiscount(f64),
    #[error("document id '{0}' appears more than once in the corpus")]
    DuplicateDocumentId(String),
}

/// A single document could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingFailure {
    #[error("document '{doc_id}' is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding { doc_id: String, valid_up_to: usize },
    #[error("scoring document '{doc_id}' panicked: {message}")]
    Panicked { doc_id: String, message: String },
}

impl MatchingFailure {
    pub fn doc_id(&self) -> &str {
        match self {
            MatchingFailure::InvalidEncoding { doc_id, .. }
            | MatchingFailure::Panicked { doc_id, .. } => doc_id,
        }
    }
}

/// Loading a configuration file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
