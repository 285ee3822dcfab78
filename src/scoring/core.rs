// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a document's score.
//!
//! Each match adds `weight / (1 + context_length)`, where the context is the
//! span from `window` characters before the match to `window` characters after
//! it, clipped to the text. Matches near the edges of a short document see
//! less context and weigh more. It's a heuristic, not a probability, but it
//! has to be reproduced exactly for scores to be comparable.
//!
//! Match offsets are bytes, but every length in the formula (window, keyword,
//! text) is counted in chars. `CharPositions` does the conversion.
//!
//! | Match  | weight                     |
//! |--------|----------------------------|
//! | Exact  | 1.0                        |
//! | Fuzzy  | similarity × fuzzy_discount |
//!
//! A keyword only goes to fuzzy matching when it has no exact hit in the
//! document. All such keywords share one tokenization of the text.

use std::collections::BTreeMap;
use std::ops::Range;
use std::time::{Duration, Instant};

use crate::config::ScoringConfig;
use crate::exact::MatchAlgorithm;
use crate::fuzzy::fuzzy_match_all;
use crate::types::{MatchKind, MatchRecord};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================
// Both values were picked empirically. They are defaults, not truths: every
// call can override them through ScoringConfig.

/// Characters of context on each side of a match.
pub const DEFAULT_CONTEXT_WINDOW: usize = 50;

/// Weight of a perfect fuzzy hit relative to an exact hit.
pub const DEFAULT_FUZZY_DISCOUNT: f64 = 0.5;

/// Total score and per-keyword counts for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentScore {
    pub total: f64,
    pub match_counts: BTreeMap<String, usize>,
}

/// Match records of one document plus where the time went.
#[derive(Debug, Clone, Default)]
pub(crate) struct MatchPass {
    pub records: Vec<MatchRecord>,
    pub fuzzy_keywords: usize,
    pub exact_time: Duration,
    pub fuzzy_time: Duration,
}

/// Char positions for byte offsets of one text.
///
/// ASCII text maps one to one and never builds the table.
#[derive(Debug, Clone)]
pub(crate) struct CharPositions {
    starts: Option<Vec<usize>>,
    char_len: usize,
}

impl CharPositions {
    pub(crate) fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                starts: None,
                char_len: text.len(),
            };
        }
        let starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let char_len = starts.len();
        Self {
            starts: Some(starts),
            char_len,
        }
    }

    pub(crate) fn char_len(&self) -> usize {
        self.char_len
    }

    /// Chars before `byte_offset`, which must sit on a char boundary.
    pub(crate) fn position(&self, byte_offset: usize) -> usize {
        match &self.starts {
            None => byte_offset,
            Some(starts) => starts.partition_point(|&start| start < byte_offset),
        }
    }
}

/// `[offset - window, offset + len + window]` clipped to `[0, text_len]`.
///
/// Unit-free; scoring passes chars.
pub fn context_window(offset: usize, len: usize, text_len: usize, window: usize) -> Range<usize> {
    let start = offset.saturating_sub(window);
    let end = offset.saturating_add(len).saturating_add(window).min(text_len);
    start..end.max(start)
}

/// `weight / (1 + context_length)` for a match at `offset`.
pub fn match_contribution(
    offset: usize,
    len: usize,
    text_len: usize,
    window: usize,
    weight: f64,
) -> f64 {
    let context = context_window(offset, len, text_len, window);
    weight / (1.0 + context.len() as f64)
}

pub(crate) fn run_match_pass(
    text: &str,
    keywords: &[String],
    algorithm: MatchAlgorithm,
    threshold: f64,
) -> MatchPass {
    let mut pass = MatchPass::default();
    let mut unmatched: Vec<&str> = Vec::new();

    let exact_start = Instant::now();
    for keyword in keywords {
        let offsets = algorithm.search(text, keyword);
        if offsets.is_empty() {
            unmatched.push(keyword);
        } else {
            pass.records.push(MatchRecord::exact(keyword.as_str(), offsets));
        }
    }
    pass.exact_time = exact_start.elapsed();

    if unmatched.is_empty() {
        return pass;
    }

    let fuzzy_start = Instant::now();
    pass.fuzzy_keywords = unmatched.len();
    let hits = fuzzy_match_all(text, &unmatched, threshold);
    for keyword in unmatched {
        if let Some(keyword_hits) = hits.get(keyword) {
            pass.records.extend(
                keyword_hits
                    .iter()
                    .map(|hit| MatchRecord::fuzzy(keyword, hit.offset, hit.similarity)),
            );
        }
    }
    pass.fuzzy_time = fuzzy_start.elapsed();

    pass
}

/// Every exact and fuzzy match of `keywords` in `text`.
///
/// Both must already be normalized. Records come out in keyword order, exact
/// ones first, fuzzy ones best-first within each keyword.
pub fn collect_matches(
    text: &str,
    keywords: &[String],
    algorithm: MatchAlgorithm,
    threshold: f64,
) -> Vec<MatchRecord> {
    run_match_pass(text, keywords, algorithm, threshold).records
}

/// Fold match records into a score. `text` is what the offsets point into.
pub fn score_matches(records: &[MatchRecord], text: &str, config: &ScoringConfig) -> DocumentScore {
    let mut score = DocumentScore::default();
    let chars = CharPositions::new(text);
    let text_len = chars.char_len();

    for record in records {
        let len = record.keyword.chars().count();
        let weight = match record.kind {
            MatchKind::Exact => 1.0,
            MatchKind::Fuzzy => record.similarity * config.fuzzy_discount,
        };

        for &offset in &record.offsets {
            let position = chars.position(offset);
            score.total += match_contribution(position, len, text_len, config.context_window, weight);
        }

        // Repeated keywords are scored independently, so their counts add up too.
        *score.match_counts.entry(record.keyword.clone()).or_insert(0) += record.count();
    }

    score
}

/// Score one normalized document against normalized keywords.
pub fn score_document(
    text: &str,
    keywords: &[String],
    algorithm: MatchAlgorithm,
    threshold: f64,
    config: &ScoringConfig,
) -> DocumentScore {
    let records = collect_matches(text, keywords, algorithm, threshold);
    score_matches(&records, text, config)
}
