// src/graph/deps.rs

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from a node id to the ordered list of node ids that must be
/// completed before it.
///
/// Derived from the flattened pairwise edges: the edge `(A, B)` ("A comes
/// before B") reads in reverse as "B depends on A". Nodes with no
/// dependencies are absent from the mapping; consumers treat absence as the
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyIndex(BTreeMap<String, Vec<String>>);

impl DependencyIndex {
    /// Invert a pairwise edge list into a dependency index.
    ///
    /// Each edge `(from, to)` contributes `from` to the dependency list of
    /// `to`. Per target, sources keep the order in which the edge list
    /// mentions them; for the edges `(A,B), (B,C), (A,C)` this yields
    /// `{B: [A], C: [B, A]}`.
    pub fn from_edges(edges: &[(String, String)]) -> Self {
        let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (from, to) in edges {
            index.entry(to.clone()).or_default().push(from.clone());
        }

        Self(index)
    }

    /// Direct dependencies of `id`; empty for nodes absent from the index.
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.0.get(id).map(|deps| deps.as_slice()).unwrap_or(&[])
    }

    /// Node ids that have at least one dependency.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
