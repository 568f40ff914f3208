// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance: insert, delete and substitute at unit cost.
//!
//! Three renditions of the same recurrence. `full_matrix` is the textbook
//! Wagner-Fischer table, `two_row` keeps only the previous row, and
//! `levenshtein_recursive` is the unmemoized definition, kept as a test oracle.
//!
//! All three count Unicode scalar values, not bytes.

/// Wagner-Fischer over a `(|a|+1) × (|b|+1)` table.
///
/// Row 0 and column 0 hold the base cases `d[i][0] = i`, `d[0][j] = j`.
/// Every other cell is the cheapest of deleting from `a`, inserting into `a`,
/// or substituting (free when the aligned characters match).
///
/// O(|a|·|b|) time and space.
pub fn full_matrix(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1) // deletion
                .min(d[i][j - 1] + 1) // insertion
                .min(d[i - 1][j - 1] + cost); // substitution
        }
    }

    d[m][n]
}

/// Same recurrence as [`full_matrix`] with two rolling rows.
///
/// The shorter string indexes the columns, so space is O(min(|a|, |b|)).
pub fn two_row(a: &str, b: &str) -> usize {
    let (long, short) = if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short: Vec<char> = short.chars().collect();
    let n = short.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, lc) in long.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// The definition of Levenshtein distance, evaluated literally.
///
/// ```text
/// lev(a, "") = |a|
/// lev("", b) = |b|
/// lev(a, b)  = lev(tail a, tail b)                       if head a == head b
///            = 1 + min(lev(tail a, b), lev(a, tail b), lev(tail a, tail b))
/// ```
///
/// Exponential time. This exists as a ground-truth oracle for tests on short
/// inputs; never route real lookups through it.
pub fn levenshtein_recursive(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    recurse(&a, &b)
}

fn recurse(a: &[char], b: &[char]) -> usize {
    match (a.split_first(), b.split_first()) {
        (_, None) => a.len(),
        (None, _) => b.len(),
        (Some((ha, ta)), Some((hb, tb))) if ha == hb => recurse(ta, tb),
        (Some((_, ta)), Some((_, tb))) => {
            1 + recurse(ta, b).min(recurse(a, tb)).min(recurse(ta, tb))
        }
    }
}
