/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for tree nodes.
//!
//! This module provides slab-backed storage for tree nodes, offering better
//! cache locality and cheaper rotations (index updates instead of pointer
//! surgery) compared to boxed nodes. Freed slots are reused by later
//! insertions.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::node::Node;

/// Index into the node arena.
///
/// A lightweight handle that is stable across mutations to other slots in
/// the slab. The reserved value [`NodeIndex::NIL`] represents the shared
/// sentinel leaf: it never addresses a slot and is treated by the tree as
/// an always-black node with no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// The sentinel index, standing in for every absent child and for the
    /// parent above the root.
    pub const NIL: NodeIndex = NodeIndex(u32::MAX);

    /// Whether this index is the sentinel.
    pub const fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    /// The raw slot number, for labeling nodes in rendered output.
    #[cfg(feature = "dot")]
    pub(crate) const fn raw(self) -> u32 {
        self.0
    }

    const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Arena storage for [`Node`]s.
///
/// A newtype wrapper around [`Slab<Node<K>>`] that provides type-safe
/// indexing via [`NodeIndex`] instead of raw slot numbers.
#[derive(Debug)]
pub(crate) struct NodeArena<K> {
    nodes: Slab<Node<K>>,
}

impl<K> NodeArena<K> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Create a new empty arena with room for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Get the number of nodes currently stored in the arena.
    #[cfg_attr(
        not(all(feature = "unittest", not(miri))),
        expect(dead_code, reason = "used by invariant checks in unittest feature")
    )]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a node into the arena, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the slab grows large enough for a slot number to collide
    /// with the sentinel index.
    pub fn insert(&mut self, node: Node<K>) -> NodeIndex {
        let slot = self.nodes.insert(node);
        assert!(slot < u32::MAX as usize, "node arena exceeded u32 capacity");
        NodeIndex(slot as u32)
    }

    /// Remove a node from the arena, returning it. The freed slot is reused
    /// by later insertions.
    ///
    /// # Panics
    ///
    /// Panics if the index is vacant or the sentinel.
    pub fn remove(&mut self, idx: NodeIndex) -> Node<K> {
        self.nodes.remove(idx.slot())
    }
}

impl<K> Index<NodeIndex> for NodeArena<K> {
    type Output = Node<K>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.slot()]
    }
}

impl<K> IndexMut<NodeIndex> for NodeArena<K> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.slot()]
    }
}
