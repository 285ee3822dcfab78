// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore with both heuristics.
//!
//! Compare right to left. On a mismatch, jump by whichever rule allows the
//! bigger shift:
//!
//! - **Bad character**: line the mismatched text byte up with its last
//!   occurrence in the pattern (or skip past it entirely).
//! - **Good suffix**: line the already-matched suffix up with its next
//!   occurrence in the pattern, or with the longest pattern prefix that is
//!   also a suffix of it.
//!
//! The good-suffix table is the full (strong) version. The bad-character rule
//! alone can't skip safely after a complete match, and the shift after a match
//! is `good_suffix[0]` (the pattern's period), which is what keeps overlapping
//! matches from being skipped.

/// Size of the byte alphabet.
const ALPHABET: usize = 256;

/// Last index of every byte in the pattern, `-1` where it never occurs.
pub fn bad_character_table(pattern: &[u8]) -> [isize; ALPHABET] {
    let mut table = [-1isize; ALPHABET];
    for (i, &byte) in pattern.iter().enumerate() {
        table[byte as usize] = i as isize;
    }
    table
}

/// Strong good-suffix shifts, `m + 1` entries.
///
/// `shift[j]` is how far to move the pattern when `pattern[j..]` matched and
/// `pattern[j - 1]` did not. `shift[0]` is the shift after a full match.
///
/// Two passes:
/// 1. Compute borders right to left; whenever a border can't be extended,
///    the suffix starting at the border gets a shift to the matching position.
/// 2. Every slot still zero gets the widest border of the whole pattern,
///    narrowing it once the position passes it.
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 1];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;

    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    let mut j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}

/// All start offsets of `pattern` in `text`, overlapping ones included.
///
/// Same contract as `kmp_search`.
pub fn boyer_moore_search(text: &str, pattern: &str) -> Vec<usize> {
    boyer_moore_search_bytes(text.as_bytes(), pattern.as_bytes())
}

/// Byte-level Boyer-Moore.
pub fn boyer_moore_search_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || n < m {
        return Vec::new();
    }

    let bad_char = bad_character_table(pattern);
    let good_suffix = good_suffix_table(pattern);
    let mut matches = Vec::new();
    let mut shift = 0;

    while shift <= n - m {
        // `unmatched` counts pattern bytes not yet confirmed; the mismatch is at `unmatched - 1`.
        let mut unmatched = m;
        while unmatched > 0 && pattern[unmatched - 1] == text[shift + unmatched - 1] {
            unmatched -= 1;
        }

        if unmatched == 0 {
            matches.push(shift);
            shift += good_suffix[0];
        } else {
            let j = unmatched - 1;
            let last = bad_char[text[shift + j] as usize];
            let bad_char_shift = (j as isize - last).max(1) as usize;
            shift += bad_char_shift.max(good_suffix[j + 1]);
        }
    }

    matches
}
