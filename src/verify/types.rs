// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What a tree walk can find wrong, and what it reports when nothing is.

use serde::Serialize;
use std::fmt;

/// Error type for BK-tree invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// An edge carries weight 0. Insertion never attaches at distance 0.
    ZeroWeightEdge { parent: String, child: String },
    /// The recorded edge weight is not what the metric now returns.
    EdgeWeightMismatch {
        parent: String,
        child: String,
        recorded: usize,
        actual: usize,
    },
    /// The metric returns a different value with its arguments swapped.
    AsymmetricMetric {
        a: String,
        b: String,
        forward: usize,
        backward: usize,
    },
    /// The same label is stored at two nodes.
    DuplicateLabel { label: String },
    /// The cached length disagrees with the number of nodes.
    LengthMismatch { recorded: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ZeroWeightEdge { parent, child } => {
                write!(f, "edge '{}' -> '{}' has weight 0", parent, child)
            }
            InvariantError::EdgeWeightMismatch {
                parent,
                child,
                recorded,
                actual,
            } => {
                write!(
                    f,
                    "edge '{}' -> '{}' recorded as {} but metric gives {}",
                    parent, child, recorded, actual
                )
            }
            InvariantError::AsymmetricMetric {
                a,
                b,
                forward,
                backward,
            } => {
                write!(
                    f,
                    "metric is not symmetric: d('{}', '{}') = {} but d('{}', '{}') = {}",
                    a, b, forward, b, a, backward
                )
            }
            InvariantError::DuplicateLabel { label } => {
                write!(f, "label '{}' is stored more than once", label)
            }
            InvariantError::LengthMismatch { recorded, actual } => {
                write!(f, "len() {} != node count {}", recorded, actual)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Shape of a tree that passed verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub nodes: usize,
    pub edges: usize,
    pub max_depth: usize,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, depth {}",
            self.nodes, self.edges, self.max_depth
        )
    }
}
