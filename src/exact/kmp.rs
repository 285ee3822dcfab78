// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt: one pass over the text, never backing up.
//!
//! The prefix table tells the scan how much of the pattern is still matched
//! after a mismatch, so the text cursor only moves forward. After a full match
//! the scan falls back through the table too, which is what makes overlapping
//! occurrences ("aba" twice in "ababa") show up without a restart.
//!
//! Works on UTF-8 bytes. A valid UTF-8 pattern can only match a valid UTF-8
//! text at char boundaries, so byte offsets are always safe to slice with.

/// Longest proper prefix of `pattern[..=i]` that is also its suffix, for each `i`.
///
/// ```text
/// pattern: a b a b c a b a
/// lps:     0 0 1 2 0 1 2 3
/// ```
pub fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        lps[i] = len;
    }

    lps
}

/// All start offsets of `pattern` in `text`, overlapping ones included.
///
/// Empty pattern or a text shorter than the pattern yields nothing.
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    kmp_search_bytes(text.as_bytes(), pattern.as_bytes())
}

/// Byte-level KMP. O(n + m).
pub fn kmp_search_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    if m == 0 || text.len() < m {
        return Vec::new();
    }

    let lps = prefix_table(pattern);
    let mut matches = Vec::new();
    let mut j = 0;

    for (i, &byte) in text.iter().enumerate() {
        while j > 0 && byte != pattern[j] {
            j = lps[j - 1];
        }
        if byte == pattern[j] {
            j += 1;
        }
        if j == m {
            matches.push(i + 1 - m);
            j = lps[j - 1];
        }
    }

    matches
}
