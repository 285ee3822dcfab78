// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a search call.
//!
//! Documents come in, score cards go out. Match records live in between and
//! are thrown away once a score card is built.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchRecord**: offsets are strictly increasing byte offsets into the
//!   normalized text, each on a char boundary. Exact records point at a real
//!   occurrence of the keyword. Fuzzy records hold exactly one offset.
//!
//! - **ScoreCard**: `score == 0.0` means nothing matched. `match_counts` only
//!   holds keywords that matched at least once.
//!
//! - **RankedResult**: every card has `score > 0`, scores never increase down
//!   the list, and equal scores keep corpus order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::MatchingFailure;

/// A document supplied by the caller.
///
/// The engine only borrows documents for the duration of a call. The `id` is
/// opaque: it is copied into the score card and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Build a document from several text fields, joined by single spaces.
    ///
    /// Empty fields are skipped so they don't leave double spaces behind.
    /// This is how a structured record (summary, skills, experience, ...)
    /// becomes one searchable body.
    pub fn from_fields<I, S>(id: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for field in fields {
            let field = field.as_ref().trim();
            if field.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(field);
        }
        Self { id: id.into(), text }
    }

    /// Decode raw extractor output.
    ///
    /// Invalid UTF-8 is a per-document fault: the caller skips the document
    /// and keeps going.
    pub fn from_utf8(id: impl Into<String>, bytes: Vec<u8>) -> Result<Self, MatchingFailure> {
        let id = id.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { id, text }),
            Err(err) => Err(MatchingFailure::InvalidEncoding {
                valid_up_to: err.utf8_error().valid_up_to(),
                doc_id: id,
            }),
        }
    }
}

/// How a keyword was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Evidence that a keyword appears in a document.
///
/// Exact records carry every offset of one keyword. Fuzzy records carry one
/// qualifying word each, so a keyword with three similar words produces
/// three records.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub keyword: String,
    pub offsets: Vec<usize>,
    pub kind: MatchKind,
    /// 1.0 for exact matches.
    pub similarity: f64,
}

impl MatchRecord {
    pub fn exact(keyword: impl Into<String>, offsets: Vec<usize>) -> Self {
        Self {
            keyword: keyword.into(),
            offsets,
            kind: MatchKind::Exact,
            similarity: 1.0,
        }
    }

    pub fn fuzzy(keyword: impl Into<String>, offset: usize, similarity: f64) -> Self {
        Self {
            keyword: keyword.into(),
            offsets: vec![offset],
            kind: MatchKind::Fuzzy,
            similarity,
        }
    }

    /// Number of matches this record contributes to the keyword's count.
    pub fn count(&self) -> usize {
        self.offsets.len()
    }
}

/// Per-document aggregate of match evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub doc_id: String,
    /// Index of the document in the submitted corpus. Used as the tiebreaker.
    pub position: usize,
    pub score: f64,
    pub match_counts: BTreeMap<String, usize>,
}

impl ScoreCard {
    pub fn total_matches(&self) -> usize {
        self.match_counts.values().sum()
    }
}

/// Score cards in rank order.
pub type RankedResult = Vec<ScoreCard>;

/// Counters and timings for one search call.
///
/// `exact_time` and `fuzzy_time` are summed across documents, so with parallel
/// scoring they can exceed `elapsed`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    pub documents: usize,
    pub scored: usize,
    pub matched: usize,
    /// (document, keyword) pairs that had no exact hit and went to fuzzy matching.
    pub fuzzy_fallbacks: usize,
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
    pub elapsed: Duration,
}

/// Everything a search call produces.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub results: RankedResult,
    /// Documents that faulted during scoring and were left out.
    pub skipped: Vec<MatchingFailure>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Every card for a corpus, ranked or not.
#[derive(Debug, Clone, Default)]
pub struct CorpusScores {
    /// One card per successfully scored document, in corpus order.
    pub cards: Vec<ScoreCard>,
    pub skipped: Vec<MatchingFailure>,
    pub stats: SearchStats,
}
