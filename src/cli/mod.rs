// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bktrees command-line interface.
//!
//! Three subcommands: `distance` to compare two strings, `lookup` to build a
//! tree from a word list and query it, and `inspect` to print a tree and its
//! verification report. The metric is chosen once with `--algorithm` and
//! applies to every subcommand.

pub mod dictionary;
pub mod display;

use bktrees::{Algorithm, DamerauLevenshtein, Levenshtein};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bktrees",
    about = "Nearest-match string lookup with edit distances and a BK-tree",
    version
)]
pub struct Cli {
    /// Distance function used for every comparison
    #[arg(short, long, value_enum, global = true, default_value = "levenshtein")]
    pub algorithm: AlgorithmArg,

    /// Fold case and strip diacritics from words and queries
    #[arg(long, global = true)]
    pub normalize: bool,

    /// Log lookup statistics to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Find the closest dictionary word for each query
    Lookup {
        /// Word list: one word per line, `#` starts a comment line
        #[arg(short, long)]
        dict: PathBuf,

        /// Only accept matches at most this far away
        #[arg(short, long)]
        max_distance: Option<usize>,

        /// Root label (defaults to the first dictionary word)
        #[arg(long)]
        root: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Words to look up
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Build a tree from a word list and print its structure
    Inspect {
        /// Word list: one word per line, `#` starts a comment line
        #[arg(short, long)]
        dict: PathBuf,

        /// Print every node, tab-indented by depth
        #[arg(long)]
        tree: bool,
    },
}

/// `--algorithm` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Levenshtein, full DP matrix
    Levenshtein,
    /// Levenshtein, two rolling rows
    LevenshteinTwoRow,
    /// Levenshtein, naive recursion (exponential; short strings only)
    LevenshteinRecursive,
    /// Damerau-Levenshtein, optimal string alignment (not a metric)
    Osa,
    /// Damerau-Levenshtein, unrestricted adjacent transpositions
    Damerau,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Levenshtein => Levenshtein::FullMatrix.into(),
            AlgorithmArg::LevenshteinTwoRow => Levenshtein::TwoRow.into(),
            AlgorithmArg::LevenshteinRecursive => Levenshtein::Recursive.into(),
            AlgorithmArg::Osa => DamerauLevenshtein::OptimalStringAlignment.into(),
            AlgorithmArg::Damerau => DamerauLevenshtein::AdjacentTranspositions.into(),
        }
    }
}
