/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Core tree structure and algorithms for the balanced index.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: write path (descent, duplicate folding, insert fixup)
//! - [`delete`]: write path (splice, successor absorption, delete fixup)
//! - [`find`]: read path (key lookup)
//! - [`rotate`]: the two subtree-pivot primitives
//! - [`invariants`][]: post-mutation structural checks (unittest feature)

mod delete;
mod find;
mod insert;
#[cfg(all(feature = "unittest", not(miri)))]
mod invariants;
mod rotate;

use crate::arena::{NodeArena, NodeIndex};
use crate::iter::InOrderIter;
use crate::node::{Color, NodeView};

/// Which child slot of a parent a node occupies.
///
/// The insert and delete fixups each come in two mirror-image families;
/// parameterizing by side lets one loop body cover both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// An ordered index over totally-ordered keys, balanced with the red/black
/// discipline, deduplicating repeated keys into a per-node multiplicity.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`] and reference each other by
/// [`NodeIndex`]. Absent children and the parent above the root are the
/// reserved sentinel index [`NodeIndex::NIL`], which the link helpers below
/// treat as a shared always-black leaf so that rotation and fixup code can
/// handle real nodes and leaves uniformly.
///
/// # Balancing
///
/// Every path from the root to a sentinel leaf carries the same number of
/// black nodes, and no red node has a red child. Together these bound the
/// tree's height at twice the shortest root-to-leaf path, so `insert`,
/// `search`, and `delete` are all O(log n) in the number of distinct keys.
#[derive(Debug)]
pub struct BalancedIndex<K> {
    /// Arena holding all tree nodes.
    pub(crate) nodes: NodeArena<K>,
    /// The root node index, sentinel when the index is empty.
    pub(crate) root: NodeIndex,
    /// Number of distinct keys currently present (multiplicity not counted).
    pub(crate) len: usize,
    /// Scratch slot standing in for the sentinel's parent back-reference.
    ///
    /// Written only while a structural deletion is in flight, to remember
    /// which node a removed black node hung from when the slot it vacated
    /// is the sentinel. Not a structural edge; nothing reads it outside the
    /// delete fixup.
    pub(crate) nil_parent: NodeIndex,
}

impl<K> BalancedIndex<K> {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            root: NodeIndex::NIL,
            len: 0,
            nil_parent: NodeIndex::NIL,
        }
    }

    /// Create a new empty index with room for `capacity` distinct keys
    /// before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: NodeIndex::NIL,
            len: 0,
            nil_parent: NodeIndex::NIL,
        }
    }

    /// Number of distinct keys currently present. Multiplicities do not
    /// contribute: inserting the same key twice yields a length of 1.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A view of the root node, or `None` for an empty index.
    pub fn root(&self) -> Option<NodeView<'_, K>> {
        NodeView::wrap(self, self.root)
    }

    /// Resolve a [`NodeIndex`] previously obtained from a view back to a
    /// view, mapping the sentinel to `None`.
    pub fn view(&self, idx: NodeIndex) -> Option<NodeView<'_, K>> {
        NodeView::wrap(self, idx)
    }

    /// An in-order iterator over `(key, multiplicity)` pairs, ascending by
    /// key. Read-only and restartable.
    pub fn in_order(&self) -> InOrderIter<'_, K> {
        InOrderIter::new(self)
    }

    /// A Graphviz rendering adapter for this index.
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> crate::dot::Dot<'_, K> {
        crate::dot::Dot { tree: self }
    }

    /// The conceptual color of a node, sentinel included.
    pub(crate) fn color_of(&self, idx: NodeIndex) -> Color {
        if idx.is_nil() {
            Color::Black
        } else {
            self.nodes[idx].color
        }
    }

    /// Recolor a live node. Must not be called with the sentinel.
    pub(crate) fn set_color(&mut self, idx: NodeIndex, color: Color) {
        self.nodes[idx].color = color;
    }

    /// The parent of a node; for the sentinel, the scratch back-reference
    /// recorded by the most recent splice.
    pub(crate) fn parent_of(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_nil() {
            self.nil_parent
        } else {
            self.nodes[idx].parent
        }
    }

    /// Set the parent of a node; for the sentinel, the scratch slot.
    pub(crate) fn set_parent_of(&mut self, idx: NodeIndex, parent: NodeIndex) {
        if idx.is_nil() {
            self.nil_parent = parent;
        } else {
            self.nodes[idx].parent = parent;
        }
    }

    /// The child of a live node on the given side.
    pub(crate) fn child_of(&self, idx: NodeIndex, side: Side) -> NodeIndex {
        self.nodes[idx].child(side)
    }

    /// Which slot of `parent` the node `idx` occupies.
    ///
    /// `idx` may be the sentinel standing in a slot just vacated by a
    /// splice: the answer is still unambiguous, because the sibling of a
    /// removed black node can never itself be a sentinel (its subtree must
    /// carry the same black count the removed node did).
    pub(crate) fn side_of(&self, idx: NodeIndex, parent: NodeIndex) -> Side {
        if self.nodes[parent].left == idx {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl<K> Default for BalancedIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
