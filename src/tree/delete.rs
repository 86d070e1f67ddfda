/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: deletion and the double-black fixup.
//!
//! Deleting first consumes multiplicity; only the last occurrence of a key
//! removes its node. Structural removal splices out a node with at most one
//! live child. A node with two live children instead absorbs its in-order
//! successor's payload and the successor (which has at most a right child,
//! being a leftmost descendant) is the node spliced. Removing a black node
//! leaves one path short of a black, repaired by the fixup loop.

use super::{BalancedIndex, Side};
use crate::arena::NodeIndex;
use crate::node::Color;

impl<K: Ord> BalancedIndex<K> {
    /// Delete one occurrence of a key.
    ///
    /// Returns `true` if the key existed: either its multiplicity was
    /// decremented or, at multiplicity 1, its node was structurally
    /// removed. Returns `false` for an absent key, leaving the index
    /// untouched.
    pub fn delete(&mut self, key: &K) -> bool {
        let deleted = self._delete(key);

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();

        deleted
    }

    fn _delete(&mut self, key: &K) -> bool {
        let node = self.find_index(key);
        if node.is_nil() {
            return false;
        }
        if self.nodes[node].multiplicity > 1 {
            self.nodes[node].multiplicity -= 1;
            return true;
        }
        self.remove_node(node);
        true
    }

    /// Structurally remove a node whose multiplicity has run out.
    fn remove_node(&mut self, node: NodeIndex) {
        // With two live children the node keeps its identity and color and
        // absorbs the successor's payload; the successor is what gets
        // spliced. Otherwise the node itself is spliced.
        let target = if self.nodes[node].left.is_nil() || self.nodes[node].right.is_nil() {
            node
        } else {
            self.minimum(self.nodes[node].right)
        };

        let removed_color = self.nodes[target].color;
        let occupant = if self.nodes[target].left.is_nil() {
            self.nodes[target].right
        } else {
            self.nodes[target].left
        };
        // The occupant may be the sentinel; `transplant` then records the
        // vacated slot's parent in the scratch back-reference for the
        // fixup below.
        self.transplant(target, occupant);

        let removed = self.nodes.remove(target);
        if target != node {
            let absorbed = &mut self.nodes[node];
            absorbed.key = removed.key;
            absorbed.multiplicity = removed.multiplicity;
        }
        self.len -= 1;

        // Splicing out a red node cannot unbalance black counts.
        if removed_color == Color::Black {
            self.delete_fixup(occupant);
        }
    }

    /// Replace `node` with `replacement` in `node`'s parent slot (or as
    /// the root), updating the replacement's parent back-reference. The
    /// replacement's children are left alone.
    fn transplant(&mut self, node: NodeIndex, replacement: NodeIndex) {
        let parent = self.nodes[node].parent;
        if parent.is_nil() {
            self.root = replacement;
        } else {
            let side = self.side_of(node, parent);
            self.nodes[parent].set_child(side, replacement);
        }
        self.set_parent_of(replacement, parent);
    }

    /// Leftmost node of the subtree rooted at `node`.
    fn minimum(&self, mut node: NodeIndex) -> NodeIndex {
        while !self.nodes[node].left.is_nil() {
            node = self.nodes[node].left;
        }
        node
    }

    /// Repair the missing black on the path through `node`'s slot.
    ///
    /// The current node carries an extra conceptual black ("double black").
    /// Loops while it is black and not the root. Per iteration, with `side`
    /// the deficient side under the parent and the sibling the parent's
    /// other child (never the sentinel while a deficiency exists):
    ///
    /// - **Case A** (sibling red): recolor sibling black and parent red,
    ///   rotate the parent toward the deficient side, recompute the
    ///   sibling. Converts to one of the black-sibling cases.
    /// - **Case B** (sibling black, both its children black): recolor the
    ///   sibling red and move to the parent. Pushes the deficiency up.
    /// - **Case C** (sibling black, far child black, near child red):
    ///   recolor the near child black and the sibling red, rotate the
    ///   sibling away from the deficient side, recompute. Sets up Case D.
    /// - **Case D** (sibling black, far child red): sibling takes the
    ///   parent's color, parent and far child go black, rotate the parent
    ///   toward the deficient side. The deficiency is resolved; jump to
    ///   the root to terminate.
    ///
    /// The final unconditional recoloring handles both terminations:
    /// reaching the root, and landing on a red node that can simply
    /// swallow the extra black.
    fn delete_fixup(&mut self, mut node: NodeIndex) {
        while node != self.root && self.color_of(node) == Color::Black {
            let parent = self.parent_of(node);
            let side = self.side_of(node, parent);
            let mut sibling = self.child_of(parent, side.opposite());

            if self.color_of(sibling) == Color::Red {
                // Case A
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child_of(parent, side.opposite());
            }

            let near = self.child_of(sibling, side);
            let far = self.child_of(sibling, side.opposite());
            if self.color_of(near) == Color::Black && self.color_of(far) == Color::Black {
                // Case B
                self.set_color(sibling, Color::Red);
                node = parent;
            } else {
                if self.color_of(far) == Color::Black {
                    // Case C
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, side.opposite());
                    sibling = self.child_of(parent, side.opposite());
                }
                // Case D
                let far = self.child_of(sibling, side.opposite());
                self.set_color(sibling, self.color_of(parent));
                self.set_color(parent, Color::Black);
                self.set_color(far, Color::Black);
                self.rotate(parent, side);
                node = self.root;
            }
        }
        if !node.is_nil() {
            self.set_color(node, Color::Black);
        }
    }
}
