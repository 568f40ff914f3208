//! Table-driven distance cases.
//!
//! Cases from https://oldfashionedsoftware.com/tag/levenshtein-distance/,
//! grouped by the edit they exercise.

use bktrees::{damerau_levenshtein, levenshtein, DamerauLevenshtein, Levenshtein};

const LEVENSHTEIN_VARIANTS: [Levenshtein; 3] = [
    Levenshtein::FullMatrix,
    Levenshtein::TwoRow,
    Levenshtein::Recursive,
];

const DAMERAU_VARIANTS: [DamerauLevenshtein; 2] = [
    DamerauLevenshtein::OptimalStringAlignment,
    DamerauLevenshtein::AdjacentTranspositions,
];

/// (a, b, distance) for which no transposition helps.
const CASES: &[(&str, &str, usize)] = &[
    // empty strings
    ("", "", 0),
    ("a", "", 1),
    ("", "a", 1),
    ("abc", "", 3),
    ("", "abc", 3),
    // equal strings
    ("a", "a", 0),
    ("abc", "abc", 0),
    // insertions
    ("a", "ab", 1),
    ("b", "ab", 1),
    ("ac", "abc", 1),
    ("abcdefg", "xabxcdxxefxgx", 6),
    // deletions
    ("ab", "a", 1),
    ("ab", "b", 1),
    ("abc", "ac", 1),
    ("xabxcdxxefxgx", "abcdefg", 6),
    // substitutions
    ("a", "b", 1),
    ("ab", "ac", 1),
    ("ac", "bc", 1),
    ("abc", "axc", 1),
    ("xabxcdxxefxgx", "1ab2cd34ef5g6", 6),
    // mixed
    ("example", "samples", 3),
    ("sturgeon", "urgently", 6),
    ("levenshtein", "frankenstein", 6),
    ("distance", "difference", 5),
    ("java was neat", "scala is great", 7),
];

/// Inputs too long for the exponential oracle.
fn long(a: &str, b: &str) -> bool {
    a.chars().count() + b.chars().count() > 12
}

#[test]
fn levenshtein_table() {
    for variant in LEVENSHTEIN_VARIANTS {
        for &(a, b, expected) in CASES {
            if variant == Levenshtein::Recursive && long(a, b) {
                continue;
            }
            assert_eq!(
                levenshtein(a, b, variant),
                expected,
                "{:?} on ({:?}, {:?})",
                variant,
                a,
                b
            );
        }
    }
}

#[test]
fn damerau_levenshtein_table() {
    for variant in DAMERAU_VARIANTS {
        for &(a, b, expected) in CASES {
            assert_eq!(
                damerau_levenshtein(a, b, variant),
                expected,
                "{:?} on ({:?}, {:?})",
                variant,
                a,
                b
            );
        }
    }
}

#[test]
fn kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting", Levenshtein::FullMatrix), 3);
}

#[test]
fn transpositions() {
    let osa = DamerauLevenshtein::OptimalStringAlignment;
    let dl = DamerauLevenshtein::AdjacentTranspositions;

    assert_eq!(damerau_levenshtein("ac", "ca", osa), 1);
    assert_eq!(damerau_levenshtein("ac", "ca", dl), 1);
    assert_eq!(levenshtein("ac", "ca", Levenshtein::FullMatrix), 2);

    // OSA may not edit the swapped pair again
    assert_eq!(damerau_levenshtein("ca", "abc", osa), 3);
    assert_eq!(damerau_levenshtein("ca", "abc", dl), 2);
}
