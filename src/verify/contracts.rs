// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build assertions on the tree's own construction invariants.
//!
//! Zero cost in release builds (`debug_assert!`). These never call the
//! metric: a distance function that breaks symmetry or identity is the
//! caller's problem, reported by [`BkTree::verify`](crate::BkTree::verify)
//! rather than by a panic.

/// Check an edge about to be attached from `parent` to `child` with weight `k`.
///
/// # Panics (debug builds only)
/// Panics if `k == 0`. Insert treats distance 0 as "already present", so a
/// zero-weight edge means the insert walk itself is broken.
#[inline]
pub fn check_edge_weight(parent: &str, child: &str, k: usize) {
    debug_assert!(
        k > 0,
        "Contract violation: edge '{}' -> '{}' must have positive weight",
        parent,
        child
    );
}
