//! Property tests for superstring generation

use proptest::prelude::*;
use superstrings_core::{
    find_max_overlap, generate_superstring, generate_superstring_with, make_substring_free,
    BruteForceSolver, GreedyMerger, Solver,
};

/// Small alphabets make overlaps frequent
fn word_strategy() -> impl Strategy<Value = String> {
    "[abc]{1,6}"
}

fn word_set_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..max_len)
}

proptest! {
    #[test]
    fn greedy_contains_every_surviving_word(words in word_set_strategy(12)) {
        let superstring = generate_superstring(&words);
        for word in make_substring_free(&words) {
            prop_assert!(superstring.contains(&word), "{word} missing from {superstring}");
        }
    }

    #[test]
    fn greedy_never_longer_than_concatenation(words in word_set_strategy(12)) {
        let reduced = make_substring_free(&words);
        let total: usize = reduced.iter().map(|w| w.len()).sum();
        prop_assert!(generate_superstring(&words).len() <= total);
    }

    #[test]
    fn filter_is_idempotent(words in word_set_strategy(12)) {
        let once = make_substring_free(&words);
        let twice = make_substring_free(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn self_overlap_is_full(word in "[a-z]{1,12}") {
        let overlap = find_max_overlap(&word, &word);
        prop_assert_eq!(overlap.length, word.chars().count());
        prop_assert_eq!(overlap.merged, word);
    }

    #[test]
    fn greedy_is_deterministic(words in word_set_strategy(10)) {
        let reduced = make_substring_free(&words);
        let first = GreedyMerger.solve(reduced.clone());
        let second = GreedyMerger.solve(reduced);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn brute_force_is_never_worse_than_greedy(words in word_set_strategy(6)) {
        let exact = generate_superstring_with(&words, &BruteForceSolver);
        let greedy = generate_superstring(&words);
        for word in make_substring_free(&words) {
            prop_assert!(exact.contains(&word));
        }
        prop_assert!(exact.chars().count() <= greedy.chars().count());
    }

    #[test]
    fn unicode_words_are_contained(words in prop::collection::vec("[aé日]{1,4}", 0..8)) {
        let superstring = generate_superstring(&words);
        for word in make_substring_free(&words) {
            prop_assert!(superstring.contains(&word));
        }
    }
}
