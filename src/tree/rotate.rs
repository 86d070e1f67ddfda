/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The two subtree-pivot primitives.
//!
//! Rotations are the sole mutators of tree shape; the insert and delete
//! fixups are expressed entirely as recolorings plus calls into this
//! module. A rotation preserves the in-order key sequence while swapping
//! the local parent/child relationship of the pivoted pair. Each one
//! updates three parent back-references (the two pivoted nodes and the
//! moved subtree's root) plus the grandparent's child slot, or the tree
//! root when the pivoted node had no parent.

use super::{BalancedIndex, Side};
use crate::arena::NodeIndex;

impl<K> BalancedIndex<K> {
    /// Pivot up `x`'s right child: it takes `x`'s place, its left subtree
    /// moves under `x`, and `x` becomes its left child.
    ///
    /// # Panics
    ///
    /// Panics if `x`'s right child is the sentinel; callers only rotate
    /// around a live pivot.
    pub(crate) fn rotate_left(&mut self, x: NodeIndex) {
        let pivot = self.nodes[x].right;
        let moved = self.nodes[pivot].left;

        self.nodes[x].right = moved;
        if !moved.is_nil() {
            self.nodes[moved].parent = x;
        }

        let x_parent = self.nodes[x].parent;
        self.nodes[pivot].parent = x_parent;
        if x_parent.is_nil() {
            self.root = pivot;
        } else if self.nodes[x_parent].left == x {
            self.nodes[x_parent].left = pivot;
        } else {
            self.nodes[x_parent].right = pivot;
        }

        self.nodes[pivot].left = x;
        self.nodes[x].parent = pivot;
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left).
    pub(crate) fn rotate_right(&mut self, x: NodeIndex) {
        let pivot = self.nodes[x].left;
        let moved = self.nodes[pivot].right;

        self.nodes[x].left = moved;
        if !moved.is_nil() {
            self.nodes[moved].parent = x;
        }

        let x_parent = self.nodes[x].parent;
        self.nodes[pivot].parent = x_parent;
        if x_parent.is_nil() {
            self.root = pivot;
        } else if self.nodes[x_parent].right == x {
            self.nodes[x_parent].right = pivot;
        } else {
            self.nodes[x_parent].left = pivot;
        }

        self.nodes[pivot].right = x;
        self.nodes[x].parent = pivot;
    }

    /// Rotate `x` down toward `side`: the fixup loops pick the direction
    /// from which mirror-image case family they are in.
    pub(crate) fn rotate(&mut self, x: NodeIndex, side: Side) {
        match side {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }
}
