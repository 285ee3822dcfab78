// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options and where they come from.
//!
//! Every knob has a default, so an empty JSON object is a valid config. The
//! CLI layers command-line flags on top of a config file on top of these
//! defaults.
//!
//! ```json
//! {
//!   "algorithm": "boyer-moore",
//!   "fuzzyThreshold": 0.8,
//!   "resultLimit": 5,
//!   "normalization": "lowercase",
//!   "scoring": { "contextWindow": 50, "fuzzyDiscount": 0.5 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::{ConfigError, InvalidQuery};
use crate::exact::MatchAlgorithm;
use crate::scoring::{DEFAULT_CONTEXT_WINDOW, DEFAULT_FUZZY_DISCOUNT};

/// Similarity a word needs before it counts as a fuzzy match.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Number of ranked results returned when the caller doesn't say.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// How text and keywords are folded before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// `str::to_lowercase`, nothing else.
    #[default]
    Lowercase,
    /// Lowercase and strip combining marks, so "café" matches "cafe".
    FoldDiacritics,
}

/// Constants of the scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Characters of context taken on each side of a match.
    pub context_window: usize,
    /// Multiplier applied to fuzzy contributions.
    pub fuzzy_discount: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            fuzzy_discount: DEFAULT_FUZZY_DISCOUNT,
        }
    }
}

/// Everything about a search call except the corpus and the keywords.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub algorithm: MatchAlgorithm,
    pub fuzzy_threshold: f64,
    pub result_limit: usize,
    pub normalization: Normalization,
    /// Score documents on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
    pub scoring: ScoringConfig,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            algorithm: MatchAlgorithm::default(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            result_limit: DEFAULT_RESULT_LIMIT,
            normalization: Normalization::default(),
            parallel: true,
            scoring: ScoringConfig::default(),
        }
    }
}

impl SearchOptions {
    pub fn with_algorithm(mut self, algorithm: MatchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Check the options and hand back the limit in its validated form.
    pub fn validate(&self) -> Result<NonZeroUsize, InvalidQuery> {
        let limit = NonZeroUsize::new(self.result_limit).ok_or(InvalidQuery::ZeroLimit)?;

        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(InvalidQuery::ThresholdOutOfRange(self.fuzzy_threshold));
        }

        let discount = self.scoring.fuzzy_discount;
        if !discount.is_finite() || discount < 0.0 {
            return Err(InvalidQuery::InvalidFuzzyDiscount(discount));
        }

        Ok(limit)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
