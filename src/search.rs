// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public entry point: corpus and keywords in, ranked score cards out.
//!
//! A call goes through four steps:
//!
//! 1. **Validate** - options, keywords, and document ids. A bad query is
//!    rejected here, before any document is touched.
//! 2. **Normalize** - each document is lowercased (or diacritic-folded) once.
//! 3. **Score** - documents are independent, so with the `parallel` feature
//!    they go through rayon. The indexed `collect` writes each result into its
//!    corpus slot, which keeps the tie order deterministic.
//! 4. **Rank** - drop zero scores, sort, truncate.
//!
//! Nothing is kept between calls. A document that faults while scoring is
//! logged, reported in `SearchReport::skipped`, and left out; the rest of the
//! corpus still gets ranked.

use std::any::Any;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::SearchOptions;
use crate::contracts::check_score_card;
use crate::error::{InvalidQuery, MatchingFailure, SearchError};
use crate::scoring::{rank, run_match_pass, score_matches, DocumentScore};
use crate::types::{CorpusScores, Document, MatchRecord, ScoreCard, SearchReport, SearchStats};
use crate::utils::{clean_keywords, normalize};

/// Rank `corpus` against `keywords`.
///
/// Returns `Err` only for an invalid query. No matches at all is `Ok` with an
/// empty result list.
///
/// ```
/// use keyscan::{search, Document, SearchOptions};
///
/// let corpus = vec![
///     Document::new("a", "Python and Rust developer"),
///     Document::new("b", "Java developer"),
/// ];
/// let report = search(&corpus, &["rust"], &SearchOptions::default()).unwrap();
/// assert_eq!(report.results.len(), 1);
/// assert_eq!(report.results[0].doc_id, "a");
/// ```
pub fn search<S: AsRef<str>>(
    corpus: &[Document],
    keywords: &[S],
    options: &SearchOptions,
) -> Result<SearchReport, SearchError> {
    let (limit, keywords) = prepare(corpus, keywords, options)?;
    let CorpusScores {
        cards,
        skipped,
        stats,
    } = score_prepared(corpus, &keywords, options);

    let results = rank(cards, limit);
    debug!(
        algorithm = %options.algorithm,
        documents = stats.documents,
        matched = stats.matched,
        returned = results.len(),
        skipped = skipped.len(),
        elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );

    Ok(SearchReport {
        results,
        skipped,
        stats,
    })
}

/// Score every document without ranking.
///
/// Cards come back in corpus order and include zero scores.
pub fn score_corpus<S: AsRef<str>>(
    corpus: &[Document],
    keywords: &[S],
    options: &SearchOptions,
) -> Result<CorpusScores, SearchError> {
    let (_, keywords) = prepare(corpus, keywords, options)?;
    Ok(score_prepared(corpus, &keywords, options))
}

/// Matches of one document, for display and debugging.
#[derive(Debug, Clone)]
pub struct DocumentMatches {
    /// The normalized text the offsets point into.
    pub text: String,
    pub records: Vec<MatchRecord>,
    pub score: DocumentScore,
}

/// Every match record of a single document, with its score.
pub fn explain<S: AsRef<str>>(
    document: &Document,
    keywords: &[S],
    options: &SearchOptions,
) -> Result<DocumentMatches, SearchError> {
    let (_, keywords) = prepare(std::slice::from_ref(document), keywords, options)?;
    let text = normalize(&document.text, options.normalization);
    let records = run_match_pass(&text, &keywords, options.algorithm, options.fuzzy_threshold).records;
    let score = score_matches(&records, &text, &options.scoring);
    Ok(DocumentMatches {
        text,
        records,
        score,
    })
}

/// Validate everything up front and clean the keywords.
fn prepare<S: AsRef<str>>(
    corpus: &[Document],
    keywords: &[S],
    options: &SearchOptions,
) -> Result<(NonZeroUsize, Vec<String>), SearchError> {
    let limit = options.validate()?;

    let keywords = clean_keywords(keywords, options.normalization);
    if keywords.is_empty() {
        return Err(InvalidQuery::NoKeywords.into());
    }

    let mut seen = HashSet::with_capacity(corpus.len());
    for document in corpus {
        if !seen.insert(document.id.as_str()) {
            return Err(InvalidQuery::DuplicateDocumentId(document.id.clone()).into());
        }
    }

    Ok((limit, keywords))
}

/// One document's card plus its share of the timings.
struct ScoredDocument {
    card: ScoreCard,
    fuzzy_keywords: usize,
    exact_time: Duration,
    fuzzy_time: Duration,
}

fn score_prepared(corpus: &[Document], keywords: &[String], options: &SearchOptions) -> CorpusScores {
    let started = Instant::now();
    let outcomes = score_all(corpus, keywords, options);

    let mut scores = CorpusScores {
        cards: Vec::with_capacity(corpus.len()),
        skipped: Vec::new(),
        stats: SearchStats {
            documents: corpus.len(),
            ..SearchStats::default()
        },
    };

    for outcome in outcomes {
        match outcome {
            Ok(scored) => {
                let stats = &mut scores.stats;
                stats.scored += 1;
                if scored.card.score > 0.0 {
                    stats.matched += 1;
                }
                stats.fuzzy_fallbacks += scored.fuzzy_keywords;
                stats.exact_time += scored.exact_time;
                stats.fuzzy_time += scored.fuzzy_time;
                scores.cards.push(scored.card);
            }
            Err(failure) => {
                warn!(doc_id = failure.doc_id(), error = %failure, "skipping document");
                scores.skipped.push(failure);
            }
        }
    }

    scores.stats.elapsed = started.elapsed();
    scores
}

fn score_all(
    corpus: &[Document],
    keywords: &[String],
    options: &SearchOptions,
) -> Vec<Result<ScoredDocument, MatchingFailure>> {
    #[cfg(feature = "parallel")]
    if options.parallel {
        return corpus
            .par_iter()
            .enumerate()
            .map(|(position, document)| score_isolated(document, position, keywords, options))
            .collect();
    }

    corpus
        .iter()
        .enumerate()
        .map(|(position, document)| score_isolated(document, position, keywords, options))
        .collect()
}

fn score_isolated(
    document: &Document,
    position: usize,
    keywords: &[String],
    options: &SearchOptions,
) -> Result<ScoredDocument, MatchingFailure> {
    isolate(&document.id, || score_one(document, position, keywords, options))
}

fn score_one(
    document: &Document,
    position: usize,
    keywords: &[String],
    options: &SearchOptions,
) -> ScoredDocument {
    let text = normalize(&document.text, options.normalization);
    let pass = run_match_pass(&text, keywords, options.algorithm, options.fuzzy_threshold);
    let score = score_matches(&pass.records, &text, &options.scoring);

    let card = ScoreCard {
        doc_id: document.id.clone(),
        position,
        score: score.total,
        match_counts: score.match_counts,
    };
    check_score_card(&card);
    trace!(doc_id = %card.doc_id, score = card.score, matches = card.total_matches(), "scored document");

    ScoredDocument {
        card,
        fuzzy_keywords: pass.fuzzy_keywords,
        exact_time: pass.exact_time,
        fuzzy_time: pass.fuzzy_time,
    }
}

/// Run `f`, turning a panic into a `MatchingFailure` for `doc_id`.
///
/// The panic hook still runs before the unwind is caught. With the default
/// hook that means one raw message on stderr per skipped document; the
/// `keyscan` binary installs a hook that logs it at debug level instead.
fn isolate<T>(doc_id: &str, f: impl FnOnce() -> T) -> Result<T, MatchingFailure> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| MatchingFailure::Panicked {
        doc_id: doc_id.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
