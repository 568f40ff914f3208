// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BK-tree: nearest-match lookup over a metric space of strings.
//!
//! Each edge is labelled with the distance between parent and child. A node has
//! at most one child per distance, so a new word walks down the edge matching
//! its distance to the current node until it finds a free slot.
//!
//! Lookup uses the triangle inequality to skip subtrees. Every word under the
//! child reached by edge `k` lies at distance `≥ k - d` from the query, where
//! `d` is the query's distance to the parent. If that lower bound can't beat
//! the best match so far, the subtree is never visited.
//!
//! # Visiting order
//!
//! The worklist is a stack. Children live in a `BTreeMap` and are pushed in
//! ascending edge weight, so the largest edge is popped first. The order is
//! fully determined by the insertion sequence, which makes tie-breaking
//! reproducible: among labels at the same minimal distance, the first one
//! popped wins.
//!
//! # Metric contract
//!
//! The result is only guaranteed to be the closest stored label when the
//! metric is symmetric and satisfies the triangle inequality. With optimal
//! string alignment (or any other non-metric) lookups still terminate and
//! still return a label within the bound, but possibly not the closest one.
//! The tree never checks the metric while building or searching; use
//! [`BkTree::verify`] to find out whether a distance function misbehaved.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::metric::{Algorithm, Metric};
use crate::verify::contracts::check_edge_weight;

/// One stored label and its children, keyed by distance from this label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    label: String,
    children: BTreeMap<usize, TreeNode>,
}

impl TreeNode {
    fn new(label: String) -> Self {
        Self {
            label,
            children: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children with the edge weight that attached each one.
    pub fn children(&self) -> impl Iterator<Item = (usize, &TreeNode)> {
        self.children.iter().map(|(&k, child)| (k, child))
    }

    fn depth(&self) -> usize {
        1 + self.children.values().map(TreeNode::depth).max().unwrap_or(0)
    }

    fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        level: usize,
        distance: Option<usize>,
    ) -> fmt::Result {
        write!(f, "{}{:?}:", "\t".repeat(level), self.label)?;
        if let Some(distance) = distance {
            write!(f, "{}", distance)?;
        }
        writeln!(f)?;
        for (&k, child) in &self.children {
            child.write_indented(f, level + 1, Some(k))?;
        }
        Ok(())
    }
}

/// A lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub label: &'a str,
    pub distance: usize,
}

/// BK-tree over strings with a fixed distance function.
///
/// The metric cannot be swapped after construction: every stored edge weight
/// was computed with it.
///
/// Not internally synchronized. Share behind a lock if one thread inserts
/// while others look up.
#[derive(Debug, Clone)]
pub struct BkTree<M = Algorithm> {
    root: Option<TreeNode>,
    metric: M,
    len: usize,
}

impl Default for BkTree<Algorithm> {
    fn default() -> Self {
        Self::empty(Algorithm::default())
    }
}

impl<M: Metric> BkTree<M> {
    /// Tree holding `root` as its only label.
    pub fn new(root: &str, metric: M) -> Self {
        Self {
            root: Some(TreeNode::new(root.to_owned())),
            metric,
            len: 1,
        }
    }

    /// Tree with no labels. The first insert becomes the root.
    pub fn empty(metric: M) -> Self {
        Self {
            root: None,
            metric,
            len: 0,
        }
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Number of stored labels.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Longest root-to-leaf path, counted in nodes. 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    /// Add `word`. Returns `false` if it was already stored.
    ///
    /// A word at distance 0 from any node on its path is considered present,
    /// so repeated inserts leave the tree untouched.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(mut node) = self.root.as_mut() else {
            tracing::trace!(word, "insert as root");
            self.root = Some(TreeNode::new(word.to_owned()));
            self.len = 1;
            return true;
        };

        loop {
            let k = self.metric.distance(&node.label, word);
            if k == 0 {
                tracing::trace!(word, "already present");
                return false;
            }

            match node.children.entry(k) {
                Entry::Occupied(slot) => node = slot.into_mut(),
                Entry::Vacant(slot) => {
                    check_edge_weight(&node.label, word, k);
                    tracing::trace!(word, parent = %node.label, k, "attached");
                    slot.insert(TreeNode::new(word.to_owned()));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Is `word` stored? Follows the insertion path only, no pruning search.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self.root.as_ref();
        while let Some(current) = node {
            let k = self.metric.distance(&current.label, word);
            if k == 0 {
                return true;
            }
            node = current.children.get(&k);
        }
        false
    }

    /// Closest stored label to `query`, with no distance limit.
    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.closest(query, None).map(|m| m.label)
    }

    /// Closest stored label at distance `<= maximum_distance` from `query`.
    pub fn lookup_within(&self, query: &str, maximum_distance: usize) -> Option<&str> {
        self.closest(query, Some(maximum_distance)).map(|m| m.label)
    }

    /// Closest stored label and its distance.
    ///
    /// `None` for `maximum_distance` means unbounded. Ties at the minimal
    /// distance go to the label visited first (see the module docs).
    pub fn closest(&self, query: &str, maximum_distance: Option<usize>) -> Option<Match<'_>> {
        let root = self.root.as_ref()?;

        // Strict bound: a candidate must beat `best_distance`.
        let mut best_distance = maximum_distance.map_or(usize::MAX, |max| max.saturating_add(1));
        let mut best: Option<&TreeNode> = None;

        let mut stack = vec![root];
        let mut visited = 0usize;
        let mut pruned = 0usize;

        while let Some(u) = stack.pop() {
            visited += 1;
            let d = self.metric.distance(query, &u.label);
            if d < best_distance {
                best = Some(u);
                best_distance = d;
            }

            for (&k, v) in &u.children {
                // Subtree under v is at least k - d away from the query.
                if k < d.saturating_add(best_distance) {
                    stack.push(v);
                } else {
                    pruned += 1;
                }
            }
        }

        tracing::debug!(query, visited, pruned, found = best.is_some(), "lookup");

        best.map(|node| Match {
            label: &node.label,
            distance: best_distance,
        })
    }

    /// Every stored label, in pre-order (the same stack order as lookup).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.root.iter().collect(),
        }
    }
}

impl<'a, M: Metric> IntoIterator for &'a BkTree<M> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Metric, S: AsRef<str>> Extend<S> for BkTree<M> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<M> fmt::Display for BkTree<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_indented(f, 0, None),
            None => write!(f, "Empty BKTree"),
        }
    }
}

/// Labels of a [`BkTree`]. Created by [`BkTree::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.values());
        Some(&node.label)
    }
}
