//! Reference scenarios with hand-computed answers.

use super::common::{approx_eq, result_ids, search_both};
use keyscan::{levenshtein_distance, search, similarity, Document, SearchOptions};

#[test]
fn test_overlapping_occurrences() {
    assert_eq!(search_both("abababab", "aba"), vec![0, 2, 4]);
}

#[test]
fn test_absent_pattern() {
    assert!(search_both("hello world", "xyz").is_empty());
}

#[test]
fn test_kitten_sitting() {
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
}

#[test]
fn test_threshold_excludes_reactjs() {
    let sim = similarity("react", "reactjs");
    assert!(approx_eq(sim, 1.0 - 2.0 / 7.0));
    assert!(sim < keyscan::DEFAULT_FUZZY_THRESHOLD);
}

/// Doc A has three exact "python" hits; doc B has one exact "python" and one
/// misspelled "javascrip" that clears the 0.8 threshold (similarity 0.9).
#[test]
fn test_exact_hits_outrank_discounted_fuzzy_hit() {
    let corpus = vec![
        Document::new("A", "python developer with python and python skills"),
        Document::new("B", "javascrip engineer who knows python"),
    ];
    let options = SearchOptions::default();
    let report = search(&corpus, &["python", "javascript"], &options).unwrap();

    assert_eq!(result_ids(&report.results), vec!["A", "B"]);

    let a = &report.results[0];
    assert_eq!(a.match_counts.len(), 1);
    assert_eq!(a.match_counts["python"], 3);
    // 46 bytes: every hit sees the whole document as context.
    assert!(approx_eq(a.score, 3.0 / 47.0));

    let b = &report.results[1];
    assert_eq!(b.match_counts["python"], 1);
    assert_eq!(b.match_counts["javascript"], 1);
    // 35 bytes: one exact hit plus 0.9 similarity at half weight.
    assert!(approx_eq(b.score, 1.0 / 36.0 + 0.9 * 0.5 / 36.0));
}
