/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the insertion path.

use balanced_index::{BalancedIndex, Color};

use crate::helpers;

#[test]
fn test_new_index_is_empty() {
    let index = BalancedIndex::<i64>::new();
    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
    assert!(index.root().is_none());
    assert!(index.search(&1).is_none());
    assert_eq!(index.in_order().count(), 0);
}

#[test]
fn test_first_insert_becomes_black_root() {
    let mut index = BalancedIndex::new();
    index.insert(7);

    let root = index.root().expect("root must exist after an insert");
    assert_eq!(*root.key(), 7);
    assert_eq!(root.color(), Color::Black);
    assert_eq!(root.multiplicity(), 1);
    assert!(root.left().is_none());
    assert!(root.right().is_none());
    assert_eq!(index.len(), 1);
}

#[test]
fn test_duplicate_insert_folds_into_multiplicity() {
    let mut index = BalancedIndex::new();
    index.insert(42);
    index.insert(42);

    assert_eq!(index.len(), 1, "duplicates must not create nodes");
    assert_eq!(index.search(&42).map(|n| n.multiplicity()), Some(2));
    assert_eq!(helpers::in_order_pairs(&index), vec![(42, 2)]);
    helpers::assert_red_black_invariants(&index);
}

#[test]
fn test_inner_grandchild_insert_restructures() {
    // 20 arrives as the inner grandchild of 10 via 30, forcing the
    // double-rotation repair; 20 must surface as the new black root.
    let mut index = BalancedIndex::new();
    for key in [10, 30, 20] {
        index.insert(key);
    }

    let root = index.root().expect("non-empty");
    assert_eq!(*root.key(), 20);
    assert_eq!(root.color(), Color::Black);
    assert_eq!(root.left().map(|n| *n.key()), Some(10));
    assert_eq!(root.right().map(|n| *n.key()), Some(30));
    assert_eq!(root.left().map(|n| n.color()), Some(Color::Red));
    assert_eq!(root.right().map(|n| n.color()), Some(Color::Red));
    helpers::assert_red_black_invariants(&index);
}

#[test]
fn test_fifteen_key_round_trip() {
    let index = helpers::build(&helpers::FIFTEEN_KEYS);

    assert_eq!(index.len(), 15);
    let mut expected = helpers::FIFTEEN_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(helpers::in_order_keys(&index), expected);
    assert!(index.in_order().all(|(_, m)| m == 1));
    helpers::assert_red_black_invariants(&index);
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut index = BalancedIndex::new();
    for key in 1..=64 {
        index.insert(key);
        helpers::assert_red_black_invariants(&index);
    }
    assert_eq!(helpers::in_order_keys(&index), (1..=64).collect::<Vec<_>>());
}

#[test]
fn test_descending_inserts_stay_balanced() {
    let mut index = BalancedIndex::new();
    for key in (1..=64).rev() {
        index.insert(key);
        helpers::assert_red_black_invariants(&index);
    }
    assert_eq!(helpers::in_order_keys(&index), (1..=64).collect::<Vec<_>>());
}

#[test]
fn test_insert_leaves_other_multiplicities_alone() {
    let mut index = helpers::build(&[8, 4, 12, 8, 8]);
    index.insert(6);

    assert_eq!(index.search(&8).map(|n| n.multiplicity()), Some(3));
    assert_eq!(index.search(&6).map(|n| n.multiplicity()), Some(1));
    helpers::assert_red_black_invariants(&index);
}
