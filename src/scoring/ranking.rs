// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how score cards get sorted.
//!
//! Highest score first. Equal scores keep the order the documents were
//! submitted in, so the same input always produces the same list, down to the
//! order of ties.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::contracts::check_ranked;
use crate::types::{RankedResult, ScoreCard};

/// Compare two score cards for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending, the document's index in the corpus
pub fn compare_cards(a: &ScoreCard, b: &ScoreCard) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Drop zero scores, sort, keep the top `limit`.
pub fn rank(cards: Vec<ScoreCard>, limit: NonZeroUsize) -> RankedResult {
    let mut ranked: Vec<ScoreCard> = cards.into_iter().filter(|card| card.score > 0.0).collect();
    ranked.sort_by(compare_cards);
    ranked.truncate(limit.get());

    check_ranked(&ranked, limit.get());
    ranked
}
