//! Scores and rankings on random corpora.

use super::common::{assert_ranked_well_formed, make_corpus};
use super::oracles::oracle_score;
use keyscan::{compare_cards, score_corpus, search, MatchAlgorithm, SearchOptions};
use proptest::prelude::*;

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("rust".to_string()),
            Just("rusty".to_string()),
            Just("pythn".to_string()),
            Just("python".to_string()),
            Just("rüst".to_string()),
            Just("pythön".to_string()),
            Just("ééé".to_string()),
            "[a-z]{1,8}",
        ],
        0..15,
    )
    .prop_map(|words| words.join(" "))
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document(), 0..20)
}

fn keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["rust", "python", "go", "kafka", "pyth"]).prop_map(str::to_string),
        1..4,
    )
}

fn options() -> impl Strategy<Value = SearchOptions> {
    (
        prop::sample::select(MatchAlgorithm::ALL.to_vec()),
        prop::sample::select(vec![0.5, 0.7, 0.8, 1.0]),
        1usize..8,
        any::<bool>(),
    )
        .prop_map(|(algorithm, threshold, limit, parallel)| {
            SearchOptions::default()
                .with_algorithm(algorithm)
                .with_fuzzy_threshold(threshold)
                .with_result_limit(limit)
                .with_parallel(parallel)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_ranked_output_is_well_formed(texts in corpus(), kws in keywords(), opts in options()) {
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let report = search(&make_corpus(&texts), &kws, &opts).unwrap();

        prop_assert!(report.skipped.is_empty());
        assert_ranked_well_formed(&report.results, opts.result_limit);
    }

    #[test]
    fn prop_scores_match_oracle(texts in corpus(), kws in keywords(), opts in options()) {
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let scores = score_corpus(&make_corpus(&texts), &kws, &opts).unwrap();
        let kw_refs: Vec<&str> = kws.iter().map(String::as_str).collect();

        prop_assert_eq!(scores.cards.len(), texts.len());
        for (card, text) in scores.cards.iter().zip(&texts) {
            let expected = oracle_score(
                text,
                &kw_refs,
                opts.fuzzy_threshold,
                opts.scoring.context_window,
                opts.scoring.fuzzy_discount,
            );
            prop_assert!(
                (card.score - expected).abs() < 1e-9,
                "{}: got {}, oracle {}", card.doc_id, card.score, expected
            );
        }
    }

    #[test]
    fn prop_results_are_top_of_score_corpus(texts in corpus(), kws in keywords(), opts in options()) {
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let corpus = make_corpus(&texts);

        let mut cards = score_corpus(&corpus, &kws, &opts).unwrap().cards;
        cards.retain(|card| card.score > 0.0);
        cards.sort_by(compare_cards);
        cards.truncate(opts.result_limit);

        let report = search(&corpus, &kws, &opts).unwrap();
        prop_assert_eq!(report.results, cards);
    }

    #[test]
    fn prop_execution_path_does_not_change_results(texts in corpus(), kws in keywords(), opts in options()) {
        let texts: Vec<&str> = texts.iter().map(String::as_str).collect();
        let corpus = make_corpus(&texts);

        let baseline = search(&corpus, &kws, &opts.with_parallel(false).with_algorithm(MatchAlgorithm::Kmp)).unwrap();
        let other = search(&corpus, &kws, &opts.with_parallel(true).with_algorithm(MatchAlgorithm::BoyerMoore)).unwrap();
        prop_assert_eq!(baseline.results, other.results);
    }
}
