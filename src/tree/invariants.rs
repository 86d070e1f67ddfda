/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the balanced index.
//!
//! These checks are gated behind the `unittest` feature flag and run after
//! every mutation (`insert`, `delete`) to catch structural violations
//! early. A violation is a programming defect in the fixup machinery, not
//! a recoverable condition, so every check panics with a descriptive
//! message.

use super::BalancedIndex;
use crate::arena::NodeIndex;
use crate::node::Color;

/// Evidence gathered from a verified subtree.
struct SubtreeCheck<'a, K> {
    /// Smallest key in the subtree.
    min: &'a K,
    /// Largest key in the subtree.
    max: &'a K,
    /// Black nodes on any path down to a sentinel, sentinel included.
    black_height: usize,
    /// Live nodes in the subtree.
    nodes: usize,
}

impl<K: Ord> BalancedIndex<K> {
    /// Verify all structural invariants of the tree.
    ///
    /// Checks, for every node: search-tree ordering, no red node with a
    /// red child, equal black counts on all paths to the sentinel leaves,
    /// parent back-reference consistency, and positive multiplicity; plus
    /// root blackness and the arena/length bookkeeping. Panics on the
    /// first violation found.
    pub fn check_tree_invariants(&self) {
        if self.root.is_nil() {
            assert_eq!(self.len, 0, "empty tree must have len 0, got {}", self.len);
            assert_eq!(
                self.nodes.len(),
                0,
                "empty tree must have an empty arena, got {} live slots",
                self.nodes.len()
            );
            return;
        }

        assert_eq!(
            self.color_of(self.root),
            Color::Black,
            "root {:?} must be black",
            self.root
        );
        assert!(
            self.nodes[self.root].parent.is_nil(),
            "root {:?} must have a sentinel parent, got {:?}",
            self.root,
            self.nodes[self.root].parent
        );

        let evidence = self.check_node_invariants(self.root);

        assert_eq!(
            evidence.nodes, self.len,
            "distinct-key count mismatch: tree holds {} nodes, len says {}",
            evidence.nodes, self.len
        );
        assert_eq!(
            evidence.nodes,
            self.nodes.len(),
            "arena leak: {} nodes reachable from the root, {} slots live",
            evidence.nodes,
            self.nodes.len()
        );
    }

    /// Recursively check invariants for the subtree rooted at `idx`.
    fn check_node_invariants(&self, idx: NodeIndex) -> SubtreeCheck<'_, K> {
        let node = &self.nodes[idx];

        assert!(
            node.multiplicity >= 1,
            "node {idx:?} has multiplicity 0 but is still linked",
        );

        // --- Invariant: no red node has a red child ---
        if node.color == Color::Red {
            for child in [node.left, node.right] {
                assert_eq!(
                    self.color_of(child),
                    Color::Black,
                    "red node {idx:?} has red child {child:?}",
                );
            }
        }

        // --- Invariant: children point back at their parent ---
        for child in [node.left, node.right] {
            if !child.is_nil() {
                assert_eq!(
                    self.nodes[child].parent, idx,
                    "child {child:?} of {idx:?} has parent {:?}",
                    self.nodes[child].parent,
                );
            }
        }

        // --- Invariant: search-tree ordering, via subtree bounds ---
        let left = (!node.left.is_nil()).then(|| self.check_node_invariants(node.left));
        let right = (!node.right.is_nil()).then(|| self.check_node_invariants(node.right));

        if let Some(left) = &left {
            assert!(
                left.max < &node.key,
                "left subtree of {idx:?} reaches past its key",
            );
        }
        if let Some(right) = &right {
            assert!(
                right.min > &node.key,
                "right subtree of {idx:?} reaches below its key",
            );
        }

        // --- Invariant: equal black count on every path ---
        let left_height = left.as_ref().map_or(1, |e| e.black_height);
        let right_height = right.as_ref().map_or(1, |e| e.black_height);
        assert_eq!(
            left_height, right_height,
            "black-height mismatch under {idx:?}: left {left_height}, right {right_height}",
        );

        SubtreeCheck {
            min: left.as_ref().map_or(&node.key, |e| e.min),
            max: right.as_ref().map_or(&node.key, |e| e.max),
            black_height: left_height + usize::from(node.color == Color::Black),
            nodes: 1
                + left.as_ref().map_or(0, |e| e.nodes)
                + right.as_ref().map_or(0, |e| e.nodes),
        }
    }
}
