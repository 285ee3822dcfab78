// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Only keywords that found nothing exactly end up here. Each one is compared
//! against every word of the document, and words close enough to the keyword
//! count as discounted matches.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
