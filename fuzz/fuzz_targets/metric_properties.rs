// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance functions.
//!
//! Checks the properties every variant must keep on arbitrary Unicode input:
//! identity, symmetry, length bounds and the ordering dl <= osa <= lev.

#![no_main]

use arbitrary::Arbitrary;
use bktrees::metric::{adjacent_transpositions, full_matrix, optimal_string_alignment, two_row};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MetricInput {
    a: String,
    b: String,
}

/// Quadratic cost, so keep inputs short.
const MAX_CHARS: usize = 64;

fn cap(s: &str) -> String {
    s.chars().take(MAX_CHARS).collect()
}

fuzz_target!(|input: MetricInput| {
    let a = cap(&input.a);
    let b = cap(&input.b);
    let (m, n) = (a.chars().count(), b.chars().count());

    let lev = full_matrix(&a, &b);
    let osa = optimal_string_alignment(&a, &b);
    let dl = adjacent_transpositions(&a, &b);

    assert_eq!(lev, two_row(&a, &b), "two_row disagrees on {:?} {:?}", a, b);
    assert_eq!(lev, full_matrix(&b, &a), "lev not symmetric");
    assert_eq!(osa, optimal_string_alignment(&b, &a), "osa not symmetric");
    assert_eq!(dl, adjacent_transpositions(&b, &a), "dl not symmetric");

    assert!(dl <= osa && osa <= lev, "ordering broken: {} {} {}", dl, osa, lev);
    assert!(lev >= m.abs_diff(n));
    assert!(lev <= m.max(n));

    assert_eq!(full_matrix(&a, &a), 0);
    assert_eq!(adjacent_transpositions(&a, &a), 0);
    assert_eq!(lev == 0, a == b);
});
