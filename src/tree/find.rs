/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: key lookup.

use std::cmp::Ordering;

use super::BalancedIndex;
use crate::arena::NodeIndex;
use crate::node::NodeView;

impl<K: Ord> BalancedIndex<K> {
    /// Look up a key, returning a read-only view of its node.
    ///
    /// Absence is a normal outcome, reported as `None`. No mutation, no
    /// rebalancing.
    pub fn search(&self, key: &K) -> Option<NodeView<'_, K>> {
        NodeView::wrap(self, self.find_index(key))
    }

    /// Whether the key is present.
    pub fn contains(&self, key: &K) -> bool {
        !self.find_index(key).is_nil()
    }

    /// Standard BST descent; sentinel when the key is absent.
    pub(crate) fn find_index(&self, key: &K) -> NodeIndex {
        let mut current = self.root;
        while !current.is_nil() {
            match key.cmp(&self.nodes[current].key) {
                Ordering::Equal => break,
                Ordering::Less => current = self.nodes[current].left,
                Ordering::Greater => current = self.nodes[current].right,
            }
        }
        current
    }
}
