// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Printing search reports and match listings.

use std::time::Duration;

use serde::Serialize;

use super::display::*;
use crate::config::SearchOptions;
use crate::error::MatchingFailure;
use crate::scoring::context_window;
use crate::search::DocumentMatches;
use crate::types::{MatchKind, ScoreCard, SearchReport, SearchStats};
use crate::utils::snippet;

/// Characters of context shown on each side of a match in `matches` output.
const SNIPPET_CONTEXT: usize = 30;

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

// ═══════════════════════════════════════════════════════════════════════════
// JSON
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportJson<'a> {
    pub results: &'a [ScoreCard],
    pub skipped: Vec<SkippedJson<'a>>,
    pub stats: StatsJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedJson<'a> {
    pub doc_id: &'a str,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsJson {
    pub documents: usize,
    pub scored: usize,
    pub matched: usize,
    pub fuzzy_fallbacks: usize,
    pub exact_ms: f64,
    pub fuzzy_ms: f64,
    pub elapsed_ms: f64,
}

impl From<&SearchStats> for StatsJson {
    fn from(stats: &SearchStats) -> Self {
        Self {
            documents: stats.documents,
            scored: stats.scored,
            matched: stats.matched,
            fuzzy_fallbacks: stats.fuzzy_fallbacks,
            exact_ms: millis(stats.exact_time),
            fuzzy_ms: millis(stats.fuzzy_time),
            elapsed_ms: millis(stats.elapsed),
        }
    }
}

impl<'a> ReportJson<'a> {
    pub fn new(report: &'a SearchReport, load_skipped: &'a [MatchingFailure]) -> Self {
        let skipped = load_skipped
            .iter()
            .chain(&report.skipped)
            .map(|failure| SkippedJson {
                doc_id: failure.doc_id(),
                reason: failure.to_string(),
            })
            .collect();
        Self {
            results: &report.results,
            skipped,
            stats: StatsJson::from(&report.stats),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL
// ═══════════════════════════════════════════════════════════════════════════

/// Ranked results, then a timing summary.
pub fn print_report(report: &SearchReport, keywords: &[String], options: &SearchOptions) {
    section_top(&format!("RESULTS  {}", keywords.join(", ")));

    if report.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no matching documents")));
    }

    for (rank, card) in report.results.iter().enumerate() {
        let counts: Vec<String> = card
            .match_counts
            .iter()
            .map(|(keyword, count)| format!("{keyword}×{count}"))
            .collect();
        let id = pad_right(&themed(BRIGHT_CYAN, &[BOLD], &truncate(&card.doc_id, 28)), 28);
        row(&format!(
            " {} {} {}  {}",
            pad_left(&(rank + 1).to_string(), 3),
            id,
            score_value(card.score),
            truncate(&counts.join(" "), 36)
        ));
    }

    section_mid("STATS");
    let stats = &report.stats;
    row(&format!(
        "  {} documents, {} matched, {} fuzzy fallbacks ({})",
        stats.documents, stats.matched, stats.fuzzy_fallbacks, options.algorithm
    ));
    row(&format!("  exact   {} ms", timing_ms(millis(stats.exact_time))));
    row(&format!("  fuzzy   {} ms", timing_ms(millis(stats.fuzzy_time))));
    row(&format!("  total   {} ms", timing_ms(millis(stats.elapsed))));
    section_bot();
}

/// Skipped documents, one per line.
pub fn print_skipped(skipped: &[MatchingFailure]) {
    if skipped.is_empty() {
        return;
    }
    section_top("SKIPPED");
    for failure in skipped {
        row(&format!("  {}", themed(RED, &[], &truncate(&failure.to_string(), BOX_WIDTH - 2))));
    }
    section_bot();
}

/// Every match record of one document, with a snippet around each hit.
pub fn print_matches(doc_id: &str, matches: &DocumentMatches) {
    section_top(&format!("MATCHES  {}", truncate(doc_id, 40)));

    if matches.records.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no matches")));
    }

    for record in &matches.records {
        for &offset in &record.offsets {
            let context = context_window(offset, record.keyword.len(), matches.text.len(), SNIPPET_CONTEXT);
            let end = match record.kind {
                MatchKind::Exact => offset + record.keyword.len(),
                // A fuzzy hit points at a word, not at the keyword; show the word.
                MatchKind::Fuzzy => word_end(&matches.text, offset, offset + record.keyword.len()),
            };
            let line = highlight(
                snippet(&matches.text, context.start, offset),
                snippet(&matches.text, offset, end),
                snippet(&matches.text, end, context.end.max(end)),
            );
            row(&format!(
                " {} {} {} {:>6}  {}",
                pad_right(&truncate(&record.keyword, 14), 14),
                match_kind_label(record.kind),
                similarity_value(record.similarity),
                offset,
                truncate(&line, 44)
            ));
        }
    }

    section_mid("SCORE");
    row(&format!("  {}", score_value(matches.score.total)));
    section_bot();
}

/// End of the word starting at `offset`, or `fallback` if the text ends first.
fn word_end(text: &str, offset: usize, fallback: usize) -> usize {
    match text.get(offset..) {
        Some(rest) => {
            let word = rest.find(char::is_whitespace).unwrap_or(rest.len());
            offset + word
        }
        None => fallback,
    }
}
