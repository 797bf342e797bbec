//! End-to-end checks on known inputs

use superstrings_core::ordering::{dedup_first_occurrence, move_to_front};
use superstrings_core::*;

#[test]
fn test_greedy_approximation_gap() {
    let words = ["cababab", "bababa", "abababc"];
    assert!(is_substring_free(&words));

    let greedy = generate_superstring(&words);
    let exact = generate_superstring_with(&words, &BruteForceSolver);

    assert_eq!(greedy, "cabababcbababa");
    assert_eq!(greedy.len(), 14);
    assert_eq!(exact, "cababababc");
    assert_eq!(exact.len(), 10);
}

#[test]
fn test_small_word_set() {
    let words = ["n", "ora", "bne", "eor"];
    // "n" is absorbed by "bne"
    assert_eq!(make_substring_free(&words), vec!["ora", "bne", "eor"]);

    let superstring = generate_superstring(&words);
    let total: usize = words.iter().map(|w| w.len()).sum();
    assert!(superstring.len() <= total);
    for word in words {
        assert!(superstring.contains(word));
    }
}

#[test]
fn test_zero_overlap_falls_back_to_concatenation() {
    let words = ["ab", "cd", "ef"];
    for (i, left) in words.iter().enumerate() {
        for right in words.iter().skip(i + 1) {
            assert_eq!(find_max_overlap(left, right).length, 0);
        }
    }
    assert_eq!(generate_superstring(&words), "abefcd");
}

#[test]
fn test_duplicates_need_upstream_dedup() {
    let words = ["LDA", "STA", "LDA"];
    assert_eq!(make_substring_free(&words), vec!["STA"]);

    let unique = dedup_first_occurrence(&words);
    let superstring = generate_superstring(&unique);
    let table = WordTable::locate(&superstring, &words).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.offsets()[0], table.offsets()[2]);
}

#[test]
fn test_order_changes_tie_breaking_but_not_containment() {
    let mut words: Vec<String> = ["ACAGG", "GGATT", "GATTA", "TTACA"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let before = generate_superstring(&words);

    move_to_front(&mut words, &["TTACA"]).unwrap();
    let after = generate_superstring(&words);

    for word in &words {
        assert!(before.contains(word.as_str()));
        assert!(after.contains(word.as_str()));
    }
    assert_eq!(after, generate_superstring(&words));
}

#[test]
fn test_table_round_trip_through_superstring() {
    let words = ["LDA", "STA", "TAX", "AXS", "SBC", "BCC", "LDA"];
    let unique = dedup_first_occurrence(&words);
    let superstring = generate_superstring(&unique);
    let table = WordTable::locate(&superstring, &words).unwrap();

    let chars: Vec<char> = superstring.chars().collect();
    for (word, entry) in words.iter().zip(table.entries()) {
        let slice: String = chars[entry.offset..entry.offset + entry.length]
            .iter()
            .collect();
        assert_eq!(&slice, word);
    }
}
