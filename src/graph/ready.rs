// src/graph/ready.rs

//! Readiness classification.
//!
//! This is the pure core behind the in-page toggle/sync behaviour: given the
//! set of nodes marked done, which of the remaining nodes are actionable?
//! The embedded client script re-derives exactly this on every click; it is
//! kept DOM-free here so the rule itself is unit-testable.

use std::collections::BTreeSet;

use crate::graph::deps::DependencyIndex;

/// Visual classification of a node for a given done-set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeClass {
    /// The node is in the done-set.
    Done,
    /// Not done, and every direct dependency is done.
    Todo,
    /// Not done, with at least one unfinished dependency.
    Neutral,
}

/// Classify a single node.
///
/// Nodes absent from the index have no dependencies and are vacuously ready.
pub fn classify_node(done: &BTreeSet<String>, index: &DependencyIndex, id: &str) -> NodeClass {
    if done.contains(id) {
        return NodeClass::Done;
    }
    let ready = index
        .dependencies_of(id)
        .iter()
        .all(|dep| done.contains(dep));
    if ready {
        NodeClass::Todo
    } else {
        NodeClass::Neutral
    }
}

/// Classify every node id in `nodes`, preserving their order.
///
/// A pure re-derivation: the result depends only on the inputs, never on any
/// previous classification, so toggling in any order and re-deriving always
/// matches a from-scratch derivation.
pub fn classify<'a>(
    done: &BTreeSet<String>,
    index: &DependencyIndex,
    nodes: impl IntoIterator<Item = &'a str>,
) -> Vec<(String, NodeClass)> {
    nodes
        .into_iter()
        .map(|id| (id.to_string(), classify_node(done, index, id)))
        .collect()
}
