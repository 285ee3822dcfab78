// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query generations: drop results of a search that has been superseded.
//!
//! A front end that searches as the user types can have several searches in
//! flight. Each one takes a ticket before it starts; when it finishes, its
//! results are only shown if no newer search began in the meantime.
//!
//! ```
//! use keyscan::generation::QueryGeneration;
//!
//! let generation = QueryGeneration::new();
//! let old = generation.begin();
//! let new = generation.begin();
//! assert_eq!(generation.accept(old, "stale"), None);
//! assert_eq!(generation.accept(new, "fresh"), Some("fresh"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Issued by [`QueryGeneration::begin`]. Only comparable with tickets from the same counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic counter of started queries. Shareable across threads.
#[derive(Debug, Default)]
pub struct QueryGeneration {
    latest: AtomicU64,
}

impl QueryGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query. Every ticket issued earlier becomes stale.
    pub fn begin(&self) -> GenerationTicket {
        GenerationTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest query, `None` otherwise.
    pub fn accept<T>(&self, ticket: GenerationTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}
