//! Ranking order, truncation, and tie handling.

use super::common::{assert_ranked_well_formed, make_corpus, result_ids, unlimited, RESUMES};
use keyscan::{search, Document, SearchOptions};

#[test]
fn test_resume_fixture_order() {
    let corpus = make_corpus(RESUMES);
    let report = search(&corpus, &["python", "rust"], &unlimited()).unwrap();

    // doc-1: two exact hits in 24 bytes, doc-0: three in 43, doc-3: one exact plus one fuzzy.
    assert_eq!(result_ids(&report.results), vec!["doc-1", "doc-0", "doc-3"]);
    assert_ranked_well_formed(&report.results, usize::MAX);
}

#[test]
fn test_limit_truncates_after_sorting() {
    let corpus = make_corpus(RESUMES);
    let options = SearchOptions::default().with_result_limit(2);
    let report = search(&corpus, &["python", "rust"], &options).unwrap();

    assert_eq!(result_ids(&report.results), vec!["doc-1", "doc-0"]);
    assert_eq!(report.stats.matched, 3);
}

#[test]
fn test_default_limit_is_five() {
    let texts: Vec<String> = (0..8).map(|i| format!("rust {}", "x".repeat(i))).collect();
    let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
    let report = search(&make_corpus(&texts), &["rust"], &SearchOptions::default()).unwrap();

    assert_eq!(report.results.len(), 5);
    // Shorter documents give the hit less context and score higher.
    assert_eq!(result_ids(&report.results), vec!["doc-0", "doc-1", "doc-2", "doc-3", "doc-4"]);
}

#[test]
fn test_ties_keep_submission_order() {
    let corpus = vec![
        Document::new("zulu", "rust engineer"),
        Document::new("alpha", "rust engineer"),
        Document::new("mike", "rust engineer"),
    ];
    let report = search(&corpus, &["rust"], &unlimited()).unwrap();

    assert_eq!(result_ids(&report.results), vec!["zulu", "alpha", "mike"]);
    assert!(report.results.windows(2).all(|w| w[0].score == w[1].score));
}

#[test]
fn test_zero_scores_never_appear() {
    let corpus = make_corpus(&["accounting", "", "rust"]);
    let report = search(&corpus, &["rust"], &unlimited()).unwrap();
    assert_eq!(result_ids(&report.results), vec!["doc-2"]);
}

#[test]
fn test_no_matches_is_ok_and_empty() {
    let corpus = make_corpus(&["accounting", "payroll"]);
    let report = search(&corpus, &["kubernetes"], &unlimited()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.stats.documents, 2);
}

#[test]
fn test_empty_corpus_is_ok_and_empty() {
    let report = search(&[], &["rust"], &SearchOptions::default()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.stats.documents, 0);
}

#[test]
fn test_positions_refer_to_corpus_index() {
    let corpus = make_corpus(RESUMES);
    let report = search(&corpus, &["python", "rust"], &unlimited()).unwrap();
    for card in &report.results {
        assert_eq!(corpus[card.position].id, card.doc_id);
    }
}
