/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion and the insert fixup.
//!
//! Inserting descends to the key's position, folds duplicates into the
//! existing node's multiplicity, and otherwise links a fresh red node at a
//! sentinel slot. A red parent then means a red-red violation, repaired by
//! the fixup loop on the way back up.

use std::cmp::Ordering;

use super::{BalancedIndex, Side};
use crate::arena::NodeIndex;
use crate::node::{Color, Node};

impl<K: Ord> BalancedIndex<K> {
    /// Insert a key.
    ///
    /// Always succeeds. If the key is already present, its node's
    /// multiplicity is incremented and the tree shape is untouched;
    /// otherwise a new node is created and the coloring discipline is
    /// restored around it.
    pub fn insert(&mut self, key: K) {
        self._insert(key);

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();
    }

    fn _insert(&mut self, key: K) {
        // Standard BST descent, remembering which slot of `parent` the
        // descent left through.
        let mut parent = NodeIndex::NIL;
        let mut side = Side::Left;
        let mut current = self.root;
        while !current.is_nil() {
            parent = current;
            match key.cmp(&self.nodes[current].key) {
                Ordering::Equal => {
                    self.nodes[current].multiplicity += 1;
                    return;
                }
                Ordering::Less => {
                    side = Side::Left;
                    current = self.nodes[current].left;
                }
                Ordering::Greater => {
                    side = Side::Right;
                    current = self.nodes[current].right;
                }
            }
        }

        let node = self.nodes.insert(Node::red(key, parent));
        self.len += 1;

        if parent.is_nil() {
            // First key: the root must be black.
            self.root = node;
            self.nodes[node].color = Color::Black;
            return;
        }
        self.nodes[parent].set_child(side, node);

        if self.nodes[parent].parent.is_nil() {
            // The parent is the (black) root: no violation possible.
            return;
        }
        self.insert_fixup(node);
    }

    /// Repair the red-red violation introduced by a fresh red node.
    ///
    /// Loops while the current node's parent is red. Per iteration, with
    /// `side` the parent's side under the grandparent and the uncle the
    /// grandparent's other child:
    ///
    /// - **Case A** (uncle red): recolor parent and uncle black and the
    ///   grandparent red, then continue from the grandparent. Pushes the
    ///   violation two levels up.
    /// - **Case B** (uncle black, current is the inner grandchild): rotate
    ///   the parent so the current node becomes an outer grandchild, then
    ///   fall through with roles updated.
    /// - **Case C** (uncle black, outer grandchild): recolor parent black
    ///   and grandparent red, rotate the grandparent away from the parent's
    ///   side. The new parent is black, so the loop terminates.
    ///
    /// The root is unconditionally recolored black afterwards, which also
    /// absorbs a final Case A recoloring that reached the root.
    fn insert_fixup(&mut self, mut node: NodeIndex) {
        while self.color_of(self.parent_of(node)) == Color::Red {
            let parent = self.parent_of(node);
            // A red parent is never the root, so the grandparent is live.
            let grandparent = self.parent_of(parent);
            let side = self.side_of(parent, grandparent);
            let uncle = self.child_of(grandparent, side.opposite());

            if self.color_of(uncle) == Color::Red {
                // Case A
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if node == self.child_of(parent, side.opposite()) {
                    // Case B
                    node = parent;
                    self.rotate(node, side);
                }
                // Case C
                let parent = self.parent_of(node);
                let grandparent = self.parent_of(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }
        self.set_color(self.root, Color::Black);
    }
}
