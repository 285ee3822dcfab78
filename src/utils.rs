// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text and keyword preparation.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::Normalization;

/// Fold text for matching.
///
/// Whitespace is left alone. Collapsing it would move offsets and change how
/// much context a match sees.
pub fn normalize(value: &str, mode: Normalization) -> String {
    match mode {
        Normalization::Lowercase => value.to_lowercase(),
        Normalization::FoldDiacritics => fold_diacritics(value),
    }
}

/// NFD, drop combining marks, lowercase.
///
/// - "café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
fn fold_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Without unicode-normalization there is nothing to decompose with; lowercase only.
#[cfg(not(feature = "unicode-normalization"))]
fn fold_diacritics(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the blocks that matter for Latin text.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Trim, normalize, drop what ends up empty. Order and duplicates are kept.
///
/// Emptiness is checked after normalization: folding can erase a keyword
/// made only of combining marks.
pub fn clean_keywords<S: AsRef<str>>(keywords: &[S], mode: Normalization) -> Vec<String> {
    keywords
        .iter()
        .map(|k| normalize(k.as_ref(), mode).trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Split a comma-separated query ("python, React ,,sql") into keywords.
///
/// Only trims; case folding happens when the search runs.
pub fn parse_keywords(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Slice of `text` over `range`, widened to char boundaries.
pub fn snippet(text: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(text.len());
    let mut end = end.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}
