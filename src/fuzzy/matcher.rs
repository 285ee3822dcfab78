// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-level fuzzy matching.
//!
//! The text is split on whitespace and every word is compared against the
//! keyword. A word qualifies when its similarity reaches the threshold.
//!
//! # Offsets
//!
//! A hit's offset is where the word's characters first appear in the text
//! (`str::find`), not where that particular word sits. Repeated words all
//! report the first position, and a word that also appears inside an earlier
//! word reports that earlier position. Offsets are only used for coarse context
//! around a hit, so this stays as is.

use std::collections::{BTreeMap, HashMap};

use super::levenshtein::{levenshtein_bounded, similarity_from_distance};

/// One qualifying word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit {
    pub offset: usize,
    pub similarity: f64,
}

/// Whitespace-delimited words of a text with their reported offsets.
///
/// Built once per text so a batch of keywords shares the tokenization.
pub struct WordTokens<'a> {
    words: Vec<(&'a str, usize)>,
}

impl<'a> WordTokens<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut first_seen: HashMap<&'a str, usize> = HashMap::new();
        let words = text
            .split_whitespace()
            .map(|word| {
                let offset = *first_seen
                    .entry(word)
                    .or_insert_with(|| text.find(word).unwrap_or(0));
                (word, offset)
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every qualifying word for `keyword`, best similarity first.
    ///
    /// Ties keep text order.
    pub fn matches(&self, keyword: &str, threshold: f64) -> Vec<FuzzyHit> {
        let keyword_len = keyword.chars().count();
        let mut hits = Vec::new();

        for &(word, offset) in &self.words {
            if let Some(similarity) = qualifying_similarity(word, keyword, keyword_len, threshold) {
                hits.push(FuzzyHit { offset, similarity });
            }
        }

        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        hits
    }
}

/// Similarity of `word` to `keyword` if it reaches `threshold`.
///
/// Bounds the edit distance first. A word can only qualify with
/// `distance <= (1 - threshold) * max_len`; one extra edit of slack keeps the
/// bound from rejecting a word the exact formula would accept.
fn qualifying_similarity(
    word: &str,
    keyword: &str,
    keyword_len: usize,
    threshold: f64,
) -> Option<f64> {
    let max_len = word.chars().count().max(keyword_len);
    if max_len == 0 {
        return (1.0 >= threshold).then_some(1.0);
    }

    let allowed = ((1.0 - threshold).max(0.0) * max_len as f64).floor() as usize + 1;
    let distance = levenshtein_bounded(word, keyword, allowed)?;
    let similarity = similarity_from_distance(distance, max_len);
    (similarity >= threshold).then_some(similarity)
}

/// Fuzzy hits of one keyword in `text`, best first.
pub fn fuzzy_match(text: &str, keyword: &str, threshold: f64) -> Vec<FuzzyHit> {
    WordTokens::new(text).matches(keyword, threshold)
}

/// Fuzzy hits for a batch of keywords, tokenizing the text once.
///
/// Keywords with no qualifying word are left out of the map.
pub fn fuzzy_match_all<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    threshold: f64,
) -> BTreeMap<String, Vec<FuzzyHit>> {
    let tokens = WordTokens::new(text);
    let mut results = BTreeMap::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if results.contains_key(keyword) {
            continue;
        }
        let hits = tokens.matches(keyword, threshold);
        if !hits.is_empty() {
            results.insert(keyword.to_string(), hits);
        }
    }

    results
}
