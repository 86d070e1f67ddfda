/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for lookup and the read-only node views.

use balanced_index::{BalancedIndex, Color};

use crate::helpers;

#[test]
fn test_search_absent_key() {
    let index = helpers::build(&[10, 20, 30]);
    assert!(index.search(&15).is_none());
    assert!(!index.contains(&15));
    assert!(index.contains(&20));
}

#[test]
fn test_search_exposes_node_payload() {
    let mut index = BalancedIndex::new();
    for key in [2, 1, 3, 3] {
        index.insert(key);
    }

    let node = index.search(&3).expect("3 was inserted");
    assert_eq!(*node.key(), 3);
    assert_eq!(node.multiplicity(), 2);
    assert_eq!(node.color(), Color::Red);

    let root = index.search(&2).expect("2 was inserted");
    assert_eq!(root.color(), Color::Black);
    assert_eq!(root.left().map(|n| *n.key()), Some(1));
    assert_eq!(root.right().map(|n| *n.key()), Some(3));
}

#[test]
fn test_view_navigation_is_consistent() {
    let index = helpers::build(&helpers::FIFTEEN_KEYS);

    let root = index.root().expect("non-empty");
    assert_eq!(*root.key(), 50);
    assert!(root.parent().is_none());

    let left = root.left().expect("root has a left subtree");
    let right = root.right().expect("root has a right subtree");
    assert_eq!(*left.key(), 25);
    assert_eq!(*right.key(), 75);

    // Parent links round-trip through the child views.
    assert_eq!(left.parent().map(|p| p.index()), Some(root.index()));
    assert_eq!(right.parent().map(|p| p.index()), Some(root.index()));

    // A stored identity resolves back to the same node.
    let resolved = index.view(left.index()).expect("identity is live");
    assert_eq!(*resolved.key(), 25);
}

#[test]
fn test_search_walks_to_deep_leaves() {
    let index = helpers::build(&helpers::FIFTEEN_KEYS);
    for &key in &helpers::FIFTEEN_KEYS {
        let node = index.search(&key).expect("every inserted key is found");
        assert_eq!(*node.key(), key);
    }
}
