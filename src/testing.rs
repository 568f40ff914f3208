//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the reference linear scan that every BK-tree lookup is
//! checked against, plus the fixture dictionary.

#![doc(hidden)]

use crate::metric::Metric;
use crate::tree::{BkTree, Match};

/// Root label of the fixture dictionary.
pub const BOOK_ROOT: &str = "book";

/// Words inserted under [`BOOK_ROOT`] in the fixture tree.
pub const BOOK_WORDS: [&str; 7] = ["books", "cake", "boo", "boon", "cook", "cape", "cart"];

/// The fixture tree: [`BOOK_WORDS`] under [`BOOK_ROOT`].
pub fn book_tree<M: Metric>(metric: M) -> BkTree<M> {
    let mut tree = BkTree::new(BOOK_ROOT, metric);
    tree.extend(BOOK_WORDS);
    tree
}

/// Closest word by exhaustive scan, `distance <= maximum_distance`.
///
/// Ties go to the earliest word in `words`. This is the oracle a pruned
/// lookup must agree with on distance, whatever label it picks.
pub fn brute_force_closest<'a, M: Metric>(
    words: &[&'a str],
    query: &str,
    metric: &M,
    maximum_distance: Option<usize>,
) -> Option<Match<'a>> {
    words
        .iter()
        .map(|&label| Match {
            label,
            distance: metric.distance(query, label),
        })
        .filter(|m| maximum_distance.map_or(true, |max| m.distance <= max))
        .min_by_key(|m| m.distance)
}

/// `count` lowercase ASCII words of `min_len..=max_len` chars, the same for a given `seed`.
pub fn generate_words(count: usize, min_len: usize, max_len: usize, seed: u64) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let span = (max_len - min_len + 1) as u64;
            let len = min_len + (next() % span) as usize;
            (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}
