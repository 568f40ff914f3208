//! Metric axioms for every distance variant.

use crate::common::{
    fast_algorithm_strategy, true_metric_strategy, unicode_word_strategy, word_strategy,
};
use crate::oracles::triangle_holds;
use bktrees::{
    damerau_levenshtein, levenshtein, Algorithm, DamerauLevenshtein, Levenshtein, Metric,
};
use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

// ============================================================================
// IDENTITY AND EMPTY STRINGS
// ============================================================================

proptest! {
    /// Property: d(a, a) == 0 for every variant.
    #[test]
    fn prop_self_distance_is_zero(word in word_strategy(), algorithm in fast_algorithm_strategy()) {
        prop_assert_eq!(algorithm.distance(&word, &word), 0);
    }

    /// Property: d("", a) == d(a, "") == |a|, counted in chars.
    #[test]
    fn prop_empty_distance_is_length(
        word in prop_oneof![word_strategy(), unicode_word_strategy()],
        algorithm in fast_algorithm_strategy(),
    ) {
        let len = word.chars().count();
        prop_assert_eq!(algorithm.distance("", &word), len);
        prop_assert_eq!(algorithm.distance(&word, ""), len);
    }

    /// Property: distinct strings are never at distance 0.
    #[test]
    fn prop_distinct_strings_are_apart(
        a in word_strategy(),
        b in word_strategy(),
        algorithm in fast_algorithm_strategy(),
    ) {
        prop_assume!(a != b);
        prop_assert!(algorithm.distance(&a, &b) > 0);
    }
}

// ============================================================================
// SYMMETRY AND BOUNDS
// ============================================================================

proptest! {
    /// Property: d(a, b) == d(b, a).
    #[test]
    fn prop_symmetric(
        a in prop_oneof![word_strategy(), unicode_word_strategy()],
        b in prop_oneof![word_strategy(), unicode_word_strategy()],
        algorithm in fast_algorithm_strategy(),
    ) {
        prop_assert_eq!(algorithm.distance(&a, &b), algorithm.distance(&b, &a));
    }

    /// Property: |len(a) - len(b)| <= d(a, b) <= max(len(a), len(b)).
    #[test]
    fn prop_length_bounds(
        a in word_strategy(),
        b in word_strategy(),
        algorithm in fast_algorithm_strategy(),
    ) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = algorithm.distance(&a, &b);
        prop_assert!(la.abs_diff(lb) <= d);
        prop_assert!(d <= la.max(lb));
    }

    /// Property: each extra edit operation can only shorten the distance.
    ///
    /// true Damerau <= OSA <= Levenshtein
    #[test]
    fn prop_transpositions_never_cost_more(a in word_strategy(), b in word_strategy()) {
        let lev = levenshtein(&a, &b, Levenshtein::FullMatrix);
        let osa = damerau_levenshtein(&a, &b, DamerauLevenshtein::OptimalStringAlignment);
        let dl = damerau_levenshtein(&a, &b, DamerauLevenshtein::AdjacentTranspositions);
        prop_assert!(dl <= osa, "dl {} > osa {} for ({:?}, {:?})", dl, osa, a, b);
        prop_assert!(osa <= lev, "osa {} > lev {} for ({:?}, {:?})", osa, lev, a, b);
    }

    /// Property: full-matrix and two-row Levenshtein always agree.
    #[test]
    fn prop_two_row_matches_full_matrix(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(
            levenshtein(&a, &b, Levenshtein::TwoRow),
            levenshtein(&a, &b, Levenshtein::FullMatrix)
        );
    }
}

// ============================================================================
// TRIANGLE INEQUALITY
// ============================================================================

proptest! {
    /// Property: the triangle inequality holds for true metrics.
    #[test]
    fn prop_triangle_inequality(
        x in word_strategy(),
        y in word_strategy(),
        z in word_strategy(),
        algorithm in true_metric_strategy(),
    ) {
        prop_assert!(
            triangle_holds(|a, b| algorithm.distance(a, b), &x, &y, &z),
            "{:?} violates triangle inequality on ({:?}, {:?}, {:?})",
            algorithm, x, y, z
        );
    }
}

/// OSA is not a metric, but violations are rare on random input.
#[test]
fn osa_triangle_inequality_usually_holds() {
    let osa = Algorithm::from(DamerauLevenshtein::OptimalStringAlignment);

    // the textbook counterexample
    assert!(!triangle_holds(|a, b| osa.distance(a, b), "ca", "ac", "abc"));

    let mut runner = TestRunner::deterministic();
    let triple = (word_strategy(), word_strategy(), word_strategy());
    let samples = 2000;
    let mut violations = 0;
    for _ in 0..samples {
        let (x, y, z) = triple.new_tree(&mut runner).unwrap().current();
        if !triangle_holds(|a, b| osa.distance(a, b), &x, &y, &z) {
            violations += 1;
        }
    }

    assert!(
        violations * 10 < samples,
        "OSA violated the triangle inequality on {} of {} triples",
        violations,
        samples
    );
}

