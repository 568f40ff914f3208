// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Damerau-Levenshtein: Levenshtein plus swapping two adjacent characters.
//!
//! There are two very different algorithms hiding behind the one name:
//!
//! - **Optimal string alignment** adds a transposition case to the ordinary
//!   DP, but no substring may be edited more than once. `"ca" → "abc"` is 3,
//!   not 2, because the transposed pair can't then have `b` inserted between
//!   it. That restriction breaks the triangle inequality, so OSA is not a
//!   metric and BK-tree pruning over it can miss the true nearest match.
//!
//! - **Unrestricted adjacent transpositions** (Lowrance-Wagner) lifts the
//!   restriction. It needs a last-occurrence table keyed by character and a
//!   sentinel border around the DP matrix, and it is a true metric.

use std::collections::HashMap;

/// Restricted edit distance: Levenshtein plus single adjacent swaps, no
/// substring edited twice.
///
/// When `a[i] == b[j-1]` and `a[i-1] == b[j]` the cell may also come from
/// `d[i-2][j-2] + 1`.
///
/// **Not a metric.** The triangle inequality fails for e.g.
/// `("ca", "ac", "abc")`: 1 + 1 < 3.
pub fn optimal_string_alignment(a: &str, b: &str) -> usize {
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
            let mut best = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(d[i - 2][j - 2] + 1);
            }

            d[i][j] = best;
        }
    }

    d[m][n]
}

/// True Damerau-Levenshtein distance with unrestricted adjacent transpositions.
///
/// The matrix carries an extra border row and column filled with
/// `maxdist = |a| + |b|`, so a transposition that would reach back before the
/// start of either string can never win the minimum.
///
/// `last_row[c]` is the last row of `a` (1-based) holding character `c`, or 0
/// if `c` has not been seen yet. `last_col` is the last column of `b` in the
/// current row whose character matched `a[i]`; it restarts at 0 each row.
///
/// A transposition from cell `(k, l)` to `(i, j)` pays for the deleted span
/// of `a` between the pair, one swap, and the inserted span of `b`.
pub fn adjacent_transpositions(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let maxdist = m + n;

    let mut last_row: HashMap<char, usize> = HashMap::with_capacity(m + n);

    // d[i + 1][j + 1] holds the distance between a[..i] and b[..j].
    let mut d = vec![vec![0usize; n + 2]; m + 2];
    d[0][0] = maxdist;
    for i in 0..=m {
        d[i + 1][0] = maxdist;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = maxdist;
        d[1][j + 1] = j;
    }

    for i in 1..=m {
        let mut last_col = 0;
        for j in 1..=n {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_col = j;
                0
            } else {
                1
            };

            let substitution = d[i][j] + cost;
            let insertion = d[i + 1][j] + 1;
            let deletion = d[i][j + 1] + 1;
            let transposition = d[k][l] + (i - k - 1) + 1 + (j - l - 1);

            d[i + 1][j + 1] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }
        last_row.insert(a[i - 1], i);
    }

    d[m + 1][n + 1]
}
