// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-keyword document ranking with exact and fuzzy matching.
//!
//! Give it a corpus and a handful of keywords; it finds every occurrence of
//! each keyword in each document, falls back to word-level fuzzy matching for
//! keywords that never occur verbatim, scores each document, and returns the
//! best few.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ exact::kmp   │   │ exact::      │
//! │ (prefix tbl) │   │ boyer_moore  │
//! └──────┬───────┘   └──────┬───────┘
//!        └────────┬─────────┘            ┌──────────────┐
//!                 ▼                      │ fuzzy        │
//!        ┌─────────────────┐  no hits   │ (levenshtein,│
//!        │ scoring::core   │───────────▶│  WordTokens) │
//!        │ (context window)│◀───────────│              │
//!        └────────┬────────┘            └──────────────┘
//!                 ▼
//!        ┌─────────────────┐      ┌─────────────────┐
//!        │ scoring::ranking│◀─────│ search          │
//!        │ (sort, truncate)│      │ (validate, par) │
//!        └─────────────────┘      └─────────────────┘
//! ```
//!
//! Matching happens on normalized (lowercased) text, and every offset is a
//! byte offset into that normalized text.
//!
//! # Usage
//!
//! ```
//! use keyscan::{search, Document, MatchAlgorithm, SearchOptions};
//!
//! let corpus = vec![
//!     Document::new("alice", "Senior Rust engineer, some Python"),
//!     Document::new("bob", "Pythn scripting and Go"),
//! ];
//! let options = SearchOptions::default().with_algorithm(MatchAlgorithm::BoyerMoore);
//! let report = search(&corpus, &["python", "rust"], &options).unwrap();
//!
//! assert_eq!(report.results[0].doc_id, "alice");
//! assert_eq!(report.results[1].match_counts["python"], 1);
//! ```

pub mod cli;
pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod exact;
pub mod fuzzy;
pub mod generation;
pub mod scoring;
mod search;
pub mod testing;
mod types;
pub mod utils;

pub use config::{Normalization, ScoringConfig, SearchOptions, DEFAULT_FUZZY_THRESHOLD, DEFAULT_RESULT_LIMIT};
pub use error::{ConfigError, InvalidQuery, MatchingFailure, SearchError};
pub use exact::{boyer_moore_search, kmp_search, MatchAlgorithm, ParseAlgorithmError};
pub use fuzzy::{fuzzy_match, fuzzy_match_all, levenshtein_distance, similarity, FuzzyHit};
pub use generation::{GenerationTicket, QueryGeneration};
pub use scoring::{
    collect_matches, compare_cards, context_window, rank, score_document, score_matches, DocumentScore,
    DEFAULT_CONTEXT_WINDOW, DEFAULT_FUZZY_DISCOUNT,
};
pub use search::{explain, score_corpus, search, DocumentMatches};
pub use types::{
    CorpusScores, Document, MatchKind, MatchRecord, RankedResult, ScoreCard, SearchReport, SearchStats,
};
pub use utils::{normalize, parse_keywords};
