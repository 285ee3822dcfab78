// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching and ranking invariants.
//!
//! These are `debug_assert!`s: free in release builds, loud in tests. The
//! matchers and the ranker call them on their own output, so any property
//! test that drives the public API also checks them.
//!
//! | Contract                 | Invariant                                        |
//! |--------------------------|--------------------------------------------------|
//! | `check_exact_offsets`    | strictly increasing, each a real occurrence      |
//! | `check_score_card`       | non-negative score, non-zero score has matches   |
//! | `check_ranked`           | bounded, positive, non-increasing, stable ties   |

use crate::scoring::{DEFAULT_CONTEXT_WINDOW, DEFAULT_FUZZY_DISCOUNT};
use crate::types::ScoreCard;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // A fuzzy hit is worth strictly less than an exact hit at the same spot.
    assert!(DEFAULT_FUZZY_DISCOUNT > 0.0);
    assert!(DEFAULT_FUZZY_DISCOUNT < 1.0);
    assert!(DEFAULT_CONTEXT_WINDOW > 0);
};

/// Every offset is a real occurrence of `pattern`, and offsets strictly increase.
#[inline]
pub fn check_exact_offsets(text: &str, pattern: &str, offsets: &[usize]) {
    for pair in offsets.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: offsets not strictly increasing ({} then {}) for '{}'",
            pair[0],
            pair[1],
            pattern
        );
    }

    for &offset in offsets {
        debug_assert!(
            text.as_bytes().get(offset..offset + pattern.len()) == Some(pattern.as_bytes()),
            "Contract violation: offset {} is not an occurrence of '{}'",
            offset,
            pattern
        );
    }
}

/// Score is finite and non-negative, and a positive score has at least one match.
#[inline]
pub fn check_score_card(card: &ScoreCard) {
    debug_assert!(
        card.score.is_finite() && card.score >= 0.0,
        "Contract violation: document '{}' has score {}",
        card.doc_id,
        card.score
    );
    debug_assert!(
        card.score == 0.0 || !card.match_counts.is_empty(),
        "Contract violation: document '{}' scored {} without any match",
        card.doc_id,
        card.score
    );
}

/// Ranked output is bounded, positive, sorted by score, and ties keep corpus order.
#[inline]
pub fn check_ranked(results: &[ScoreCard], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "Contract violation: {} results exceed limit {}",
        results.len(),
        limit
    );

    for card in results {
        debug_assert!(
            card.score > 0.0,
            "Contract violation: zero-score document '{}' in ranked results",
            card.doc_id
        );
    }

    for (i, pair) in results.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        debug_assert!(
            prev.score > curr.score || (prev.score == curr.score && prev.position < curr.position),
            "Contract violation: results[{}] ('{}', {}) should not precede results[{}] ('{}', {})",
            i,
            prev.doc_id,
            prev.score,
            i + 1,
            curr.doc_id,
            curr.score
        );
    }
}
