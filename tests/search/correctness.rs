//! Match semantics through the public `search` entry point.

use super::common::{approx_eq, make_corpus, result_ids, unlimited};
use keyscan::{explain, search, Document, MatchKind, Normalization, SearchOptions};

#[test]
fn test_matching_ignores_case_on_both_sides() {
    let corpus = make_corpus(&["Senior RUST Engineer", "rust hobbyist"]);
    let report = search(&corpus, &["Rust"], &unlimited()).unwrap();

    assert_eq!(result_ids(&report.results).len(), 2);
    assert!(report.results.iter().all(|card| card.match_counts["rust"] == 1));
}

#[test]
fn test_keywords_are_trimmed_and_empties_dropped() {
    let corpus = make_corpus(&["go and rust"]);
    let report = search(&corpus, &["  rust  ", "", "   "], &unlimited()).unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].match_counts.keys().collect::<Vec<_>>(), vec!["rust"]);
}

#[test]
fn test_overlapping_occurrences_all_count() {
    let corpus = make_corpus(&["abababab"]);
    let report = search(&corpus, &["aba"], &unlimited()).unwrap();
    assert_eq!(report.results[0].match_counts["aba"], 3);
}

#[test]
fn test_substring_hits_count_as_exact() {
    // "rust" inside "rustacean" is an exact hit; no fuzzy pass runs for it.
    let doc = Document::new("a", "a rustacean");
    let matches = explain(&doc, &["rust"], &SearchOptions::default()).unwrap();
    assert_eq!(matches.records.len(), 1);
    assert_eq!(matches.records[0].kind, MatchKind::Exact);
    assert_eq!(matches.records[0].offsets, vec![2]);
}

#[test]
fn test_fuzzy_runs_only_without_exact_hits() {
    let corpus = make_corpus(&["pythn and python", "pythn only"]);
    let report = search(&corpus, &["python"], &unlimited()).unwrap();

    // Exact "python" in doc-0 suppresses its fuzzy "pythn"; doc-1 only has the fuzzy hit.
    assert_eq!(report.stats.fuzzy_fallbacks, 1);
    let doc0 = report.results.iter().find(|c| c.doc_id == "doc-0").unwrap();
    let doc1 = report.results.iter().find(|c| c.doc_id == "doc-1").unwrap();
    assert_eq!(doc0.match_counts["python"], 1);
    assert_eq!(doc1.match_counts["python"], 1);
}

#[test]
fn test_fuzzy_threshold_boundary() {
    // similarity("react", "reactjs") = 1 - 2/7 ≈ 0.714
    let corpus = make_corpus(&["reactjs developer"]);

    let strict = search(&corpus, &["react"], &unlimited()).unwrap();
    // "react" is a substring of "reactjs", so it is an exact hit either way.
    assert_eq!(strict.results.len(), 1);

    let corpus = make_corpus(&["reactjs developer"]);
    let fuzzy_only = search(&corpus, &["reacts"], &unlimited()).unwrap();
    // "reacts" vs "reactjs": distance 1, similarity 1 - 1/7 ≈ 0.857
    assert_eq!(fuzzy_only.results.len(), 1);

    let too_far = search(&make_corpus(&["reactjs"]), &["reat"], &unlimited()).unwrap();
    // "reat" vs "reactjs": distance 3, similarity 1 - 3/7 ≈ 0.571
    assert!(too_far.results.is_empty());
}

#[test]
fn test_fuzzy_offset_is_first_occurrence_of_word() {
    let doc = Document::new("a", "pythn x pythn");
    let matches = explain(&doc, &["python"], &SearchOptions::default()).unwrap();

    assert_eq!(matches.records.len(), 2);
    assert!(matches.records.iter().all(|r| r.kind == MatchKind::Fuzzy));
    // Both occurrences report the offset of the first one.
    assert!(matches.records.iter().all(|r| r.offsets == vec![0]));
}

#[test]
fn test_empty_and_short_documents_score_zero() {
    let corpus = make_corpus(&["", "ru", "rust"]);
    let report = search(&corpus, &["rust"], &unlimited()).unwrap();
    assert_eq!(result_ids(&report.results), vec!["doc-2"]);
}

#[test]
fn test_multibyte_text_offsets_are_byte_offsets() {
    let doc = Document::new("a", "Café RÉSUMÉ, résumé");
    let matches = explain(&doc, &["résumé"], &SearchOptions::default()).unwrap();

    assert_eq!(matches.text, "café résumé, résumé");
    let offsets = &matches.records[0].offsets;
    assert_eq!(offsets.len(), 2);
    for &offset in offsets {
        assert!(matches.text.is_char_boundary(offset));
        assert!(matches.text[offset..].starts_with("résumé"));
    }
}

#[test]
fn test_fold_diacritics_matches_unaccented_keywords() {
    let corpus = make_corpus(&["Résumé writing and café management"]);

    let plain = search(&corpus, &["resume"], &unlimited()).unwrap();
    let folded = search(
        &corpus,
        &["resume"],
        &unlimited().with_normalization(Normalization::FoldDiacritics),
    )
    .unwrap();

    let folded_card = &folded.results[0];
    assert_eq!(folded_card.match_counts["resume"], 1);
    if let Some(card) = plain.results.first() {
        // Without folding "resume" can at best be a fuzzy hit on "résumé".
        assert!(card.score < folded_card.score);
    }
}

#[test]
fn test_exact_score_matches_formula() {
    // One hit in a 4-char document: the whole text is context.
    let corpus = make_corpus(&["rust"]);
    let report = search(&corpus, &["rust"], &unlimited()).unwrap();
    assert!(approx_eq(report.results[0].score, 1.0 / 5.0));
}

#[test]
fn test_context_is_counted_in_chars() {
    // "é" is two bytes, so the text is 14 chars but 24 bytes long.
    let corpus = vec![Document::new("a", format!("{}rust", "é".repeat(10)))];
    let report = search(&corpus, &["rust"], &unlimited()).unwrap();
    assert!(approx_eq(report.results[0].score, 1.0 / 15.0));

    let matches = explain(&corpus[0], &["rust"], &unlimited()).unwrap();
    assert_eq!(matches.records[0].offsets, vec![20]);
    assert!(approx_eq(matches.score.total, report.results[0].score));
}

#[test]
fn test_context_window_is_configurable() {
    let text = format!("{}rust{}", "x".repeat(200), "y".repeat(200));
    let corpus = vec![Document::new("a", text)];

    let mut options = unlimited();
    options.scoring.context_window = 10;
    let report = search(&corpus, &["rust"], &options).unwrap();

    assert!(approx_eq(report.results[0].score, 1.0 / (1.0 + 24.0)));
}

#[test]
fn test_fuzzy_discount_is_configurable() {
    let corpus = make_corpus(&["pythn"]);
    let mut options = unlimited();

    options.scoring.fuzzy_discount = 1.0;
    let full = search(&corpus, &["python"], &options).unwrap().results[0].score;
    options.scoring.fuzzy_discount = 0.25;
    let quarter = search(&corpus, &["python"], &options).unwrap().results[0].score;

    assert!(approx_eq(full, 4.0 * quarter));
}
