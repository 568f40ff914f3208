//! Edit-distance string metrics and a BK-tree for nearest-match lookup.
//!
//! Given a dictionary of strings, find the stored string closest to a query
//! without comparing the query against every word. The tree does this by
//! pruning with the triangle inequality, which is why the choice of metric
//! matters: pruning is only exact for a true metric.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │    metric/       │────▶│   tree.rs    │────▶│    verify/       │
//! │ (Levenshtein,    │     │ (BkTree,     │     │ (BkTree::verify, │
//! │  Damerau, Metric)│     │  insert,     │     │  contracts)      │
//! └──────────────────┘     │  lookup)     │     └──────────────────┘
//!                          └──────────────┘
//! ```
//!
//! The tree depends on the metric module only through the [`Metric`] trait,
//! so any `Fn(&str, &str) -> usize` can stand in for the built-in distances.
//!
//! # Usage
//!
//! ```
//! use bktrees::{BkTree, Levenshtein};
//!
//! let mut tree = BkTree::new("book", Levenshtein::FullMatrix);
//! tree.extend(["books", "cake", "boo", "boon", "cook", "cape", "cart"]);
//!
//! assert_eq!(tree.lookup("cool"), Some("cook"));
//! assert_eq!(tree.lookup_within("zzzzz", 2), None);
//! ```
//!
//! # Choosing a metric
//!
//! | Metric                                       | Safe for BK-tree pruning |
//! |----------------------------------------------|--------------------------|
//! | `Levenshtein::FullMatrix` / `TwoRow`         | yes                      |
//! | `DamerauLevenshtein::AdjacentTranspositions` | yes                      |
//! | `DamerauLevenshtein::OptimalStringAlignment` | no, may miss the closest |
//! | `Levenshtein::Recursive`                     | yes, but exponential     |

// Module declarations
pub mod metric;
pub mod normalize;
#[doc(hidden)]
pub mod testing;
mod tree;
pub mod verify;

// Re-exports for public API
pub use metric::{
    damerau_levenshtein, levenshtein, Algorithm, DamerauLevenshtein, Levenshtein, Metric,
};
pub use normalize::normalize;
pub use tree::{BkTree, Iter, Match, TreeNode};
pub use verify::{InvariantError, VerificationReport};
