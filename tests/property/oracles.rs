//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that mirror the recurrences
//! directly. They serve as ground truth for the optimized DP routines.

/// Optimal string alignment distance, evaluated straight from its recurrence.
///
/// Exponential time: keep inputs to a handful of characters.
pub fn oracle_osa(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    osa(&a, &b)
}

fn osa(a: &[char], b: &[char]) -> usize {
    let (i, j) = (a.len(), b.len());
    if i == 0 {
        return j;
    }
    if j == 0 {
        return i;
    }

    let cost = usize::from(a[i - 1] != b[j - 1]);
    let mut best = (osa(&a[..i - 1], b) + 1)
        .min(osa(a, &b[..j - 1]) + 1)
        .min(osa(&a[..i - 1], &b[..j - 1]) + cost);

    if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
        best = best.min(osa(&a[..i - 2], &b[..j - 2]) + 1);
    }
    best
}

/// Does `d(x, z) <= d(x, y) + d(y, z)` hold for this triple?
pub fn triangle_holds<F: Fn(&str, &str) -> usize>(d: F, x: &str, y: &str, z: &str) -> bool {
    d(x, z) <= d(x, y) + d(y, z)
}
