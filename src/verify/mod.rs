// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: whole-tree checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **`BkTree::verify`** walks a finished tree and recomputes every edge
//!    weight with the tree's metric. Use it in tests, or after building a
//!    tree from an untrusted distance function.
//!
//! 2. **Runtime contracts** that panic in debug builds if the insert walk
//!    breaks its own invariants. Zero-cost in release. They never judge the
//!    caller's metric; only `verify` does that, and it returns an error.

pub mod contracts;
mod types;

pub use types::*;

use std::collections::HashSet;

use crate::metric::Metric;
use crate::tree::{BkTree, TreeNode};

impl<M: Metric> BkTree<M> {
    /// Check every structural invariant of the tree.
    ///
    /// For every edge `u -k-> v`: `k > 0`, `k == d(u, v) == d(v, u)`.
    /// Labels are unique, and `len()` matches the node count.
    pub fn verify(&self) -> Result<VerificationReport, InvariantError> {
        let mut report = VerificationReport::default();
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.len());

        let mut stack: Vec<(&TreeNode, usize)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            report.nodes += 1;
            report.max_depth = report.max_depth.max(depth);

            if !seen.insert(node.label()) {
                return Err(InvariantError::DuplicateLabel {
                    label: node.label().to_owned(),
                });
            }

            for (recorded, child) in node.children() {
                report.edges += 1;
                check_edge(self.metric(), node, child, recorded)?;
                stack.push((child, depth + 1));
            }
        }

        if report.nodes != self.len() {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len(),
                actual: report.nodes,
            });
        }

        Ok(report)
    }
}

fn check_edge<M: Metric>(
    metric: &M,
    parent: &TreeNode,
    child: &TreeNode,
    recorded: usize,
) -> Result<(), InvariantError> {
    if recorded == 0 {
        return Err(InvariantError::ZeroWeightEdge {
            parent: parent.label().to_owned(),
            child: child.label().to_owned(),
        });
    }

    let forward = metric.distance(parent.label(), child.label());
    if forward != recorded {
        return Err(InvariantError::EdgeWeightMismatch {
            parent: parent.label().to_owned(),
            child: child.label().to_owned(),
            recorded,
            actual: forward,
        });
    }

    let backward = metric.distance(child.label(), parent.label());
    if backward != forward {
        return Err(InvariantError::AsymmetricMetric {
            a: parent.label().to_owned(),
            b: child.label().to_owned(),
            forward,
            backward,
        });
    }

    Ok(())
}
