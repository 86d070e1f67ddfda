/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Graphviz rendering adapter, behind the `dot` feature.
//!
//! Formats an index as a `digraph` for consumption by external tooling.
//! Red and black nodes are drawn as filled circles with the multiplicity
//! in the label when above 1; sentinel leaves are gray squares reached by
//! dashed edges. Pure formatting: this module performs no I/O.

use std::fmt;

use crate::BalancedIndex;
use crate::arena::NodeIndex;
use crate::node::Color;

/// Borrowing [`fmt::Display`] adapter created by [`BalancedIndex::dot`].
pub struct Dot<'a, K> {
    pub(crate) tree: &'a BalancedIndex<K>,
}

impl<K> Dot<'_, K>
where
    K: fmt::Display,
{
    fn node_fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
        idx: NodeIndex,
        nil_counter: &mut usize,
    ) -> fmt::Result {
        let node = &self.tree.nodes[idx];
        let id = idx.raw();

        let fill = match node.color {
            Color::Red => "red",
            Color::Black => "black",
        };
        if node.multiplicity > 1 {
            writeln!(
                f,
                r#"  n{id} [label="{}\n({})" fillcolor={fill} fontcolor=white];"#,
                node.key, node.multiplicity,
            )?;
        } else {
            writeln!(
                f,
                r#"  n{id} [label="{}" fillcolor={fill} fontcolor=white];"#,
                node.key,
            )?;
        }

        for (child, label) in [(node.left, "L"), (node.right, "R")] {
            if child.is_nil() {
                let nil_id = *nil_counter;
                *nil_counter += 1;
                writeln!(
                    f,
                    r#"  nil{nil_id} [label="NIL" shape=square fillcolor=lightgray fontcolor=black];"#,
                )?;
                writeln!(f, r#"  n{id} -> nil{nil_id} [style=dashed];"#)?;
            } else {
                writeln!(f, r#"  n{id} -> n{} [label="{label}"];"#, child.raw())?;
                self.node_fmt(f, child, nil_counter)?;
            }
        }
        Ok(())
    }
}

impl<K> fmt::Display for Dot<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "  rankdir=TB;")?;
        writeln!(f, "  node [shape=circle style=filled];")?;
        if self.tree.root.is_nil() {
            writeln!(f, r#"  empty [label="empty" shape=plaintext style=""];"#)?;
        } else {
            let mut nil_counter = 0;
            self.node_fmt(f, self.tree.root, &mut nil_counter)?;
        }
        write!(f, "}}")
    }
}
