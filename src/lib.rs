/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! BalancedIndex - an in-memory ordered index over totally-ordered keys.
//!
//! This crate provides a self-balancing binary search tree with an explicit
//! red/black coloring discipline and a per-key occurrence counter. Keys are
//! deduplicated: inserting a key that is already present increments the
//! node's multiplicity instead of creating a duplicate node.
//!
//! # Overview
//!
//! The [`BalancedIndex`] supports:
//!
//! - `insert` with the three-case recolor/rotate fixup
//! - `delete` with the double-black fixup, aware of multiplicities
//! - `search` returning a read-only [`NodeView`] handle
//! - in-order listing of `(key, multiplicity)` pairs
//!
//! # Arena Storage
//!
//! All nodes live in a slab-backed arena and reference each other by
//! [`NodeIndex`] instead of pointers. This provides better cache locality,
//! keeps rotations O(1) index updates, and sidesteps the aliasing hazards
//! of a parent-linked pointer structure. The absence of a child is
//! represented by the reserved [`NodeIndex::NIL`] sentinel index, which the
//! tree treats as a shared, always-black leaf.
//!
//! # Concurrency
//!
//! The index is a single-threaded, synchronous structure. Callers that need
//! shared access must serialize all operations externally.
//!
//! # Example
//!
//! ```
//! use balanced_index::BalancedIndex;
//!
//! let mut index = BalancedIndex::new();
//! index.insert(42);
//! index.insert(17);
//! index.insert(42);
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.search(&42).map(|n| n.multiplicity()), Some(2));
//!
//! assert!(index.delete(&42));
//! assert_eq!(index.search(&42).map(|n| n.multiplicity()), Some(1));
//!
//! let pairs: Vec<_> = index.in_order().map(|(k, m)| (*k, m)).collect();
//! assert_eq!(pairs, vec![(17, 1), (42, 1)]);
//! ```

mod arena;
#[cfg(feature = "dot")]
mod dot;
mod iter;
mod node;
mod tree;

pub use arena::NodeIndex;
#[cfg(feature = "dot")]
pub use dot::Dot;
pub use iter::InOrderIter;
pub use node::{Color, NodeView};
pub use tree::BalancedIndex;
