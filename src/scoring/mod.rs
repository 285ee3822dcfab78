// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers and their order.
//!
//! `core` turns matches into a score per document. `ranking` sorts the cards
//! and cuts the list down to size.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_cards, rank};
