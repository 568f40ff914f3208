//! Lookup scenarios over the fixture dictionary.

use crate::common::{book_tree, BOOK_ROOT, BOOK_WORDS};
use bktrees::{Algorithm, BkTree, DamerauLevenshtein, Levenshtein, Match};

#[test]
fn cool_finds_cook() {
    let tree = book_tree(Algorithm::default());
    assert_eq!(tree.lookup("cool"), Some("cook"));
}

#[test]
fn far_query_within_two_is_not_found() {
    let tree = book_tree(Algorithm::default());
    assert_eq!(tree.lookup_within("zzzzz", 2), None);
    // unbounded, something is always found
    assert!(tree.lookup("zzzzz").is_some());
}

#[test]
fn every_word_finds_itself_at_zero() {
    for algorithm in [
        Algorithm::from(Levenshtein::FullMatrix),
        Algorithm::from(Levenshtein::TwoRow),
        Algorithm::from(DamerauLevenshtein::OptimalStringAlignment),
        Algorithm::from(DamerauLevenshtein::AdjacentTranspositions),
    ] {
        let tree = book_tree(algorithm);
        for word in BOOK_WORDS.iter().copied().chain([BOOK_ROOT]) {
            assert_eq!(
                tree.closest(word, Some(0)),
                Some(Match {
                    label: word,
                    distance: 0
                }),
                "{:?}",
                algorithm
            );
        }
    }
}

#[test]
fn bound_is_inclusive() {
    let tree = book_tree(Algorithm::default());
    // "cool" is exactly 1 from "cook"
    assert_eq!(tree.lookup_within("cool", 1), Some("cook"));
    assert_eq!(tree.lookup_within("cool", 0), None);
}

#[test]
fn damerau_tree_treats_swaps_as_one_edit() {
    let mut lev = BkTree::new("form", Levenshtein::FullMatrix);
    let mut dl = BkTree::new("form", DamerauLevenshtein::AdjacentTranspositions);
    for tree_words in ["farm", "fork", "foam"] {
        lev.insert(tree_words);
        dl.insert(tree_words);
    }

    // "from" is a swap away from "form"
    assert_eq!(dl.closest("from", None).map(|m| m.distance), Some(1));
    assert_eq!(lev.closest("from", None).map(|m| m.distance), Some(2));
}

#[test]
fn recursive_oracle_tree_agrees_with_full_matrix() {
    let fast = book_tree(Levenshtein::FullMatrix);
    let slow = book_tree(Levenshtein::Recursive);
    for query in ["cool", "bake", "car", "bo", ""] {
        assert_eq!(
            fast.closest(query, None).map(|m| m.distance),
            slow.closest(query, None).map(|m| m.distance),
            "query {:?}",
            query
        );
    }
}
