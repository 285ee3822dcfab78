// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity score built on it.
//!
//! Everything here counts Unicode scalar values, not bytes, so "café" and
//! "cafe" are one substitution apart.
//!
//! The bounded variant has two early exits:
//! `|len(a) - len(b)|` is a lower bound on the distance, and once every cell
//! of a DP row exceeds the bound no later row can come back under it.

/// Levenshtein distance with a single rolling row.
///
/// The row is sized to the shorter string, so memory is O(min(n, m)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (long, short) = order_by_len(a, b);
    let short: Vec<char> = short.chars().collect();
    if short.is_empty() {
        return long.chars().count();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[short.len()]
}

/// Distance if it is at most `max`, `None` otherwise.
///
/// Gives up as soon as the answer is known to exceed `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let (long, short) = order_by_len(a, b);
    let short: Vec<char> = short.chars().collect();
    let long_len = long.chars().count();

    if long_len - short.len() > max {
        return None;
    }
    if short.is_empty() {
        return Some(long_len);
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    let distance = row[short.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}

/// `1 - distance / max(len)`, in `[0, 1]`.
///
/// Two empty strings are identical (1.0). One empty and one non-empty string
/// share nothing (0.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    similarity_from_distance(levenshtein_distance(a, b), max_len)
}

#[inline]
pub(crate) fn similarity_from_distance(distance: usize, max_len: usize) -> f64 {
    1.0 - distance as f64 / max_len as f64
}

/// Longer string first (by char count).
fn order_by_len<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    }
}
