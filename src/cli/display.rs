// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the bktrees CLI.
//!
//! Colour only when stdout is a TTY, and never when `NO_COLOR` is set. Plain
//! text goes to pipes so output stays greppable.

use bktrees::{Match, VerificationReport};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    paint(use_colors(), styles, text)
}

fn paint(colored: bool, styles: &[&str], text: &str) -> String {
    if colored {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Green for exact, yellow for near, red for far.
fn distance_color(distance: usize) -> &'static str {
    match distance {
        0 => GREEN,
        1 | 2 => YELLOW,
        _ => RED,
    }
}

/// `query → label (distance N)` or `query → not found`.
pub fn format_match(query: &str, found: Option<Match<'_>>) -> String {
    render_match(use_colors(), query, found)
}

fn render_match(colored: bool, query: &str, found: Option<Match<'_>>) -> String {
    match found {
        Some(m) => format!(
            "{} → {} {}",
            query,
            paint(colored, &[BOLD], m.label),
            paint(
                colored,
                &[distance_color(m.distance)],
                &format!("(distance {})", m.distance)
            )
        ),
        None => format!("{} → {}", query, paint(colored, &[DIM], "not found")),
    }
}

pub fn section(label: &str) -> String {
    styled(&[BOLD, CYAN], &format!("── {} ──", label))
}

pub fn format_report(report: &VerificationReport) -> String {
    format!("{} {}", styled(&[GREEN], "✓"), report)
}
