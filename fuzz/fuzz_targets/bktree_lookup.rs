// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for BK-tree construction and lookup.
//!
//! A pruned lookup under a true metric must report the same distance as a
//! linear scan, and the built tree must pass `verify`.

#![no_main]

use arbitrary::Arbitrary;
use bktrees::testing::brute_force_closest;
use bktrees::{Algorithm, BkTree, DamerauLevenshtein, Levenshtein};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct LookupInput {
    words: Vec<String>,
    query: String,
    max_distance: Option<u8>,
    damerau: bool,
}

const MAX_WORDS: usize = 64;
const MAX_CHARS: usize = 16;

fn cap(s: &str) -> String {
    s.chars().take(MAX_CHARS).collect()
}

fuzz_target!(|input: LookupInput| {
    let words: Vec<String> = input.words.iter().take(MAX_WORDS).map(|w| cap(w)).collect();
    let query = cap(&input.query);
    let max_distance = input.max_distance.map(usize::from);

    let metric = if input.damerau {
        Algorithm::from(DamerauLevenshtein::AdjacentTranspositions)
    } else {
        Algorithm::from(Levenshtein::TwoRow)
    };

    let mut tree = BkTree::empty(metric);
    tree.extend(&words);

    let report = tree.verify().expect("tree built by insert must verify");
    assert_eq!(report.nodes, tree.len());

    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let expected = brute_force_closest(&refs, &query, &metric, max_distance);
    let found = tree.closest(&query, max_distance);

    assert_eq!(
        found.map(|m| m.distance),
        expected.map(|m| m.distance),
        "query {:?} max {:?}",
        query,
        max_distance
    );
    if let Some(m) = found {
        assert!(tree.contains(m.label));
    }
});
