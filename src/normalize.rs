// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Folding words before they reach the metric.
//!
//! Edit distance is literal: `"Café"` and `"cafe"` are two edits apart. When
//! a dictionary should match regardless of case and accents, fold both the
//! stored words and the queries through [`normalize`] first. The tree itself
//! never normalizes; mixing folded and unfolded words in one tree gives
//! meaningless distances.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase, strip diacritics, and collapse whitespace.
///
/// - "Café" → "cafe"
/// - "tummalachērla" → "tummalacherla"
/// - "  New   York " → "new york"
///
/// With the `unicode-normalization` feature: NFD decompose, drop combining
/// marks, then lowercase. Without it, lowercase only.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace. Assumes input is ASCII or pre-folded.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks left over after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
