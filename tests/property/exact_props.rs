//! Exact matchers against the brute-force oracle.

use super::oracles::oracle_search;
use keyscan::exact::{bad_character_table, good_suffix_table, prefix_table};
use keyscan::{boyer_moore_search, kmp_search, MatchAlgorithm};
use proptest::prelude::*;

/// Small alphabets produce lots of partial and overlapping matches.
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ab]{0,40}",
        "[abc ]{0,60}",
        "[a-z ]{0,80}",
        "(café|cafe|é|a| ){0,20}",
    ]
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[ab]{1,5}", "[abc ]{1,4}", "[a-z]{1,3}", "(é|a|caf){1,3}"]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_kmp_matches_oracle(text in text_strategy(), pattern in pattern_strategy()) {
        prop_assert_eq!(kmp_search(&text, &pattern), oracle_search(&text, &pattern));
    }

    #[test]
    fn prop_boyer_moore_matches_oracle(text in text_strategy(), pattern in pattern_strategy()) {
        prop_assert_eq!(boyer_moore_search(&text, &pattern), oracle_search(&text, &pattern));
    }

    #[test]
    fn prop_every_offset_is_an_occurrence(text in text_strategy(), pattern in pattern_strategy()) {
        for algorithm in MatchAlgorithm::ALL {
            let offsets = algorithm.search(&text, &pattern);
            for &offset in &offsets {
                prop_assert!(text.is_char_boundary(offset));
                prop_assert_eq!(&text[offset..offset + pattern.len()], pattern.as_str());
            }
            prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_pattern_in_middle_is_found(prefix in "[a-z]{0,20}", pattern in "[a-z]{1,8}", suffix in "[a-z]{0,20}") {
        let text = format!("{prefix}{pattern}{suffix}");
        for algorithm in MatchAlgorithm::ALL {
            prop_assert!(algorithm.search(&text, &pattern).contains(&prefix.len()));
        }
    }

    #[test]
    fn prop_empty_inputs_find_nothing(text in text_strategy(), pattern in pattern_strategy()) {
        for algorithm in MatchAlgorithm::ALL {
            prop_assert!(algorithm.search(&text, "").is_empty());
            prop_assert!(algorithm.search("", &pattern).is_empty());
        }
    }

    #[test]
    fn prop_prefix_table_entries_are_borders(pattern in "[ab]{1,20}") {
        let bytes = pattern.as_bytes();
        let lps = prefix_table(bytes);
        prop_assert_eq!(lps.len(), bytes.len());
        for (i, &border) in lps.iter().enumerate() {
            prop_assert!(border <= i);
            prop_assert_eq!(&bytes[..border], &bytes[i + 1 - border..=i]);
        }
    }

    #[test]
    fn prop_shift_tables_are_sane(pattern in "[a-d]{1,16}") {
        let bytes = pattern.as_bytes();
        let last = bad_character_table(bytes);
        for (i, &b) in bytes.iter().enumerate() {
            prop_assert!(last[b as usize] >= i as isize);
        }
        let shift = good_suffix_table(bytes);
        prop_assert_eq!(shift.len(), bytes.len() + 1);
        prop_assert!(shift.iter().all(|&s| s >= 1 && s <= bytes.len()));
    }
}
