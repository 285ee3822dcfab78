// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the keyscan command-line interface.
//!
//! Two subcommands: `search` ranks a corpus against a keyword list, and
//! `matches` shows every exact and fuzzy hit inside one document, which is
//! handy for understanding why a document scored the way it did.
//!
//! Options are layered: built-in defaults, then the `--config` JSON file,
//! then whatever flags were given on the command line.

pub mod display;
pub mod render;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{Normalization, SearchOptions};
use crate::error::ConfigError;
use crate::exact::MatchAlgorithm;
use crate::utils::parse_keywords;

#[derive(Parser, Debug)]
#[command(
    name = "keyscan",
    about = "Rank text documents by multi-keyword relevance",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). KEYSCAN_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default `tracing` filter for the verbosity flags.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "keyscan=debug,warn",
            _ => "keyscan=trace,info",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a corpus against keywords
    Search {
        /// Directory of .txt files, or a JSON file {"documents": [{"id", "text"}]}
        #[arg(short, long)]
        corpus: PathBuf,

        #[command(flatten)]
        query: QueryArgs,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Score documents on one thread
        #[arg(long)]
        sequential: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every match of the keywords in a single text file
    Matches {
        /// Text file to inspect
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Query flags shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Comma-separated keywords, e.g. "python, react, sql"
    #[arg(short, long)]
    pub keywords: String,

    /// Exact matching algorithm: kmp or boyer-moore
    #[arg(short, long)]
    pub algorithm: Option<MatchAlgorithm>,

    /// Minimum similarity for a fuzzy match, 0.0 to 1.0
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Characters of context on each side of a match
    #[arg(long)]
    pub context_window: Option<usize>,

    /// Weight of a fuzzy match relative to an exact one
    #[arg(long)]
    pub fuzzy_discount: Option<f64>,

    /// Ignore accents when matching ("cafe" finds "café")
    #[arg(long)]
    pub fold_diacritics: bool,

    /// JSON file with search options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl QueryArgs {
    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(&self.keywords)
    }

    /// Defaults, then the config file, then these flags.
    pub fn options(&self) -> Result<SearchOptions, ConfigError> {
        let base = match &self.config {
            Some(path) => SearchOptions::load(path)?,
            None => SearchOptions::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay the flags that were given onto `options`.
    pub fn apply(&self, mut options: SearchOptions) -> SearchOptions {
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm;
        }
        if let Some(threshold) = self.threshold {
            options.fuzzy_threshold = threshold;
        }
        if let Some(window) = self.context_window {
            options.scoring.context_window = window;
        }
        if let Some(discount) = self.fuzzy_discount {
            options.scoring.fuzzy_discount = discount;
        }
        if self.fold_diacritics {
            options.normalization = Normalization::FoldDiacritics;
        }
        options
    }
}
