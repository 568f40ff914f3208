// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String metrics: integer edit distances between two strings.
//!
//! Every function here is pure. Inputs of any length are valid, including the
//! empty string, and every variant agrees on the trivial cases:
//! `distance("", "") == 0`, `distance(a, a) == 0`, `distance("", a) == |a|`.
//!
//! | Variant                                   | Metric? | Cost        |
//! |-------------------------------------------|---------|-------------|
//! | `Levenshtein::FullMatrix`                 | yes     | O(mn) space |
//! | `Levenshtein::TwoRow`                     | yes     | O(n) space  |
//! | `Levenshtein::Recursive`                  | yes     | exponential |
//! | `DamerauLevenshtein::OptimalStringAlignment` | **no**  | O(mn) space |
//! | `DamerauLevenshtein::AdjacentTranspositions` | yes     | O(mn) space |
//!
//! "Metric" here means the triangle inequality holds, which is what BK-tree
//! pruning depends on.

mod damerau;
mod levenshtein;

pub use damerau::{adjacent_transpositions, optimal_string_alignment};
pub use levenshtein::{full_matrix, levenshtein_recursive, two_row};

use std::sync::Once;

use serde::{Deserialize, Serialize};

/// Levenshtein algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Levenshtein {
    #[default]
    FullMatrix,
    TwoRow,
    /// Unmemoized recursion. Exponential time; test oracle only.
    Recursive,
}

/// Damerau-Levenshtein algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DamerauLevenshtein {
    /// Restricted edit distance. Not a metric.
    OptimalStringAlignment,
    #[default]
    AdjacentTranspositions,
}

impl DamerauLevenshtein {
    /// Another name for optimal string alignment.
    pub const RESTRICTED_EDIT_DISTANCE: Self = Self::OptimalStringAlignment;
}

/// Any supported distance algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "family", content = "variant")]
pub enum Algorithm {
    Levenshtein(Levenshtein),
    DamerauLevenshtein(DamerauLevenshtein),
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Levenshtein(Levenshtein::FullMatrix)
    }
}

impl From<Levenshtein> for Algorithm {
    fn from(variant: Levenshtein) -> Self {
        Algorithm::Levenshtein(variant)
    }
}

impl From<DamerauLevenshtein> for Algorithm {
    fn from(variant: DamerauLevenshtein) -> Self {
        Algorithm::DamerauLevenshtein(variant)
    }
}

/// Guards the one-per-process warning for `Levenshtein::Recursive`.
static RECURSIVE_WARNING: Once = Once::new();

/// Levenshtein distance between `a` and `b` under the chosen variant.
pub fn levenshtein(a: &str, b: &str, variant: Levenshtein) -> usize {
    match variant {
        Levenshtein::FullMatrix => full_matrix(a, b),
        Levenshtein::TwoRow => two_row(a, b),
        Levenshtein::Recursive => {
            RECURSIVE_WARNING.call_once(|| {
                tracing::warn!(
                    a_len = a.chars().count(),
                    b_len = b.chars().count(),
                    "recursive Levenshtein is exponential-time; use FullMatrix or TwoRow"
                );
            });
            levenshtein_recursive(a, b)
        }
    }
}

/// Damerau-Levenshtein distance between `a` and `b` under the chosen variant.
pub fn damerau_levenshtein(a: &str, b: &str, variant: DamerauLevenshtein) -> usize {
    match variant {
        DamerauLevenshtein::OptimalStringAlignment => optimal_string_alignment(a, b),
        DamerauLevenshtein::AdjacentTranspositions => adjacent_transpositions(a, b),
    }
}

/// A distance function over strings.
///
/// Implementations must be deterministic, symmetric, non-negative and return
/// 0 exactly for equal strings. BK-tree lookups are only guaranteed to find
/// the closest match when the triangle inequality also holds; a metric that
/// breaks it still works, but may return a match that is not the closest.
pub trait Metric {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Does this distance satisfy the triangle inequality?
    fn is_true_metric(&self) -> bool {
        true
    }
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> usize,
{
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

impl Metric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b, *self)
    }
}

impl Metric for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b, *self)
    }

    fn is_true_metric(&self) -> bool {
        *self != DamerauLevenshtein::OptimalStringAlignment
    }
}

impl Metric for Algorithm {
    fn distance(&self, a: &str, b: &str) -> usize {
        match *self {
            Algorithm::Levenshtein(variant) => levenshtein(a, b, variant),
            Algorithm::DamerauLevenshtein(variant) => damerau_levenshtein(a, b, variant),
        }
    }

    fn is_true_metric(&self) -> bool {
        match self {
            Algorithm::Levenshtein(variant) => variant.is_true_metric(),
            Algorithm::DamerauLevenshtein(variant) => variant.is_true_metric(),
        }
    }
}
