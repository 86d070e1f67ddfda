/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the in-order iterator.

use balanced_index::BalancedIndex;

use crate::helpers;

#[test]
fn test_in_order_reports_multiplicities() {
    let index = helpers::build(&[30, 10, 20, 10, 30, 30]);
    assert_eq!(
        helpers::in_order_pairs(&index),
        vec![(10, 2), (20, 1), (30, 3)]
    );
}

#[test]
fn test_iterator_is_restartable() {
    let index = helpers::build(&helpers::FIFTEEN_KEYS);

    let mut first = index.in_order();
    // Drain part of one walk; a fresh walk must still see everything.
    for _ in 0..7 {
        first.next();
    }
    let full: Vec<i64> = index.in_order().map(|(k, _)| *k).collect();

    let mut expected = helpers::FIFTEEN_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(full, expected);
}

#[test]
fn test_into_iterator_for_reference() {
    let index = helpers::build(&[3, 1, 2, 2]);

    let mut pairs = Vec::new();
    for (key, multiplicity) in &index {
        pairs.push((*key, multiplicity));
    }
    assert_eq!(pairs, vec![(1, 1), (2, 2), (3, 1)]);
}

#[test]
fn test_empty_index_yields_nothing() {
    let index = BalancedIndex::<i64>::new();
    assert!(index.in_order().next().is_none());
}

#[test]
fn test_iteration_after_deletions() {
    let mut index = helpers::build(&helpers::FIFTEEN_KEYS);
    for key in [5, 50, 90] {
        assert!(index.delete(&key));
    }

    let mut expected: Vec<i64> = helpers::FIFTEEN_KEYS
        .iter()
        .copied()
        .filter(|k| ![5, 50, 90].contains(k))
        .collect();
    expected.sort_unstable();
    assert_eq!(helpers::in_order_keys(&index), expected);
}
