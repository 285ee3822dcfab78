//! Identical inputs give identical rankings, whatever the execution path.

use super::common::{make_corpus, unlimited, RESUMES};
use keyscan::{search, Document, MatchAlgorithm, SearchOptions};

fn generated_corpus(size: usize) -> Vec<Document> {
    let words = ["rust", "pythn", "python", "java", "golang", "kafka", "team", "lead"];
    (0..size)
        .map(|i| {
            let text: Vec<&str> = (0..(i % 13) + 1).map(|j| words[(i * 3 + j * 5) % words.len()]).collect();
            Document::new(format!("doc-{i:03}"), text.join(" "))
        })
        .collect()
}

#[test]
fn test_repeated_calls_are_identical() {
    let corpus = make_corpus(RESUMES);
    let first = search(&corpus, &["python", "rust"], &unlimited()).unwrap();
    for _ in 0..10 {
        let again = search(&corpus, &["python", "rust"], &unlimited()).unwrap();
        assert_eq!(first.results, again.results);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let corpus = generated_corpus(500);
    let keywords = ["python", "rust", "kafka"];
    let parallel = search(&corpus, &keywords, &unlimited().with_parallel(true)).unwrap();
    let sequential = search(&corpus, &keywords, &unlimited().with_parallel(false)).unwrap();

    assert!(!parallel.results.is_empty());
    assert_eq!(parallel.results, sequential.results);
}

#[test]
fn test_algorithms_agree_on_rankings() {
    let corpus = generated_corpus(200);
    let keywords = ["python", "golang", "lead"];
    let kmp = search(&corpus, &keywords, &unlimited().with_algorithm(MatchAlgorithm::Kmp)).unwrap();
    let bm = search(&corpus, &keywords, &unlimited().with_algorithm(MatchAlgorithm::BoyerMoore)).unwrap();
    assert_eq!(kmp.results, bm.results);
}

#[test]
fn test_serialized_results_are_byte_identical() {
    let corpus = generated_corpus(100);
    let options = SearchOptions::default().with_result_limit(20);
    let a = serde_json::to_string(&search(&corpus, &["rust"], &options).unwrap().results).unwrap();
    let b = serde_json::to_string(&search(&corpus, &["rust"], &options).unwrap().results).unwrap();
    assert_eq!(a, b);
}
