/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Node payload and the read-only [`NodeView`] handle.

use crate::BalancedIndex;
use crate::arena::NodeIndex;
use crate::tree::Side;

/// Node coloring of the red/black balancing discipline.
///
/// The sentinel leaf has no stored color; the tree reports it as
/// [`Color::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A node in the index. One node per distinct key currently present.
#[derive(Debug)]
pub(crate) struct Node<K> {
    /// The key. Never mutated after creation, except when the node absorbs
    /// its in-order successor's payload during deletion.
    pub key: K,
    /// Count of logical insertions of this key. Always at least 1; the node
    /// is removed from the tree when a delete would take it to 0.
    pub multiplicity: u32,
    pub color: Color,
    pub left: NodeIndex,
    pub right: NodeIndex,
    /// Back-reference to the parent, [`NodeIndex::NIL`] for the root.
    pub parent: NodeIndex,
}

impl<K> Node<K> {
    /// Create a freshly inserted node: red, multiplicity 1, sentinel
    /// children, linked under `parent`.
    pub fn red(key: K, parent: NodeIndex) -> Self {
        Self {
            key,
            multiplicity: 1,
            color: Color::Red,
            left: NodeIndex::NIL,
            right: NodeIndex::NIL,
            parent,
        }
    }

    pub fn child(&self, side: Side) -> NodeIndex {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, idx: NodeIndex) {
        match side {
            Side::Left => self.left = idx,
            Side::Right => self.right = idx,
        }
    }
}

/// A read-only handle to one node of a [`BalancedIndex`].
///
/// Returned by [`BalancedIndex::search`], [`BalancedIndex::root`], and
/// [`BalancedIndex::view`]. Exposes the node's payload and its three
/// structural relations, which is sufficient for a collaborator to walk
/// the whole tree (e.g. to render a diagram) without ever observing a
/// half-mutated state: views only exist between operations.
#[derive(Debug)]
pub struct NodeView<'a, K> {
    tree: &'a BalancedIndex<K>,
    idx: NodeIndex,
}

impl<K> Clone for NodeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeView<'_, K> {}

impl<'a, K> NodeView<'a, K> {
    /// Resolve an index to a view, mapping the sentinel to `None`.
    pub(crate) fn wrap(tree: &'a BalancedIndex<K>, idx: NodeIndex) -> Option<Self> {
        (!idx.is_nil()).then_some(Self { tree, idx })
    }

    /// The node's arena identity.
    pub fn index(&self) -> NodeIndex {
        self.idx
    }

    pub fn key(&self) -> &'a K {
        &self.tree.nodes[self.idx].key
    }

    pub fn multiplicity(&self) -> u32 {
        self.tree.nodes[self.idx].multiplicity
    }

    pub fn color(&self) -> Color {
        self.tree.nodes[self.idx].color
    }

    /// The parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeView<'a, K>> {
        Self::wrap(self.tree, self.tree.nodes[self.idx].parent)
    }

    /// The left child, or `None` for a sentinel child.
    pub fn left(&self) -> Option<NodeView<'a, K>> {
        Self::wrap(self.tree, self.tree.nodes[self.idx].left)
    }

    /// The right child, or `None` for a sentinel child.
    pub fn right(&self) -> Option<NodeView<'a, K>> {
        Self::wrap(self.tree, self.tree.nodes[self.idx].right)
    }
}
