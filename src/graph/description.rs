// src/graph/description.rs

use crate::recipe::{Node, Recipe};

/// Abstract description of a recipe's dependency graph: the normalized nodes
/// and the flattened directed pairwise edges.
///
/// Assumes a validated [`Recipe`], so every edge endpoint is a declared node.
#[derive(Debug, Clone)]
pub struct GraphDescription {
    nodes: Vec<Node>,
    edges: Vec<(String, String)>,
}

impl GraphDescription {
    /// Build a description from a validated [`Recipe`].
    ///
    /// Each authored chain decomposes into its consecutive pairs: a chain of
    /// length n yields exactly n-1 edges, in chain order. Chains are
    /// processed in authored order.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let nodes = recipe.nodes().to_vec();

        let edges = recipe
            .chains()
            .iter()
            .flat_map(|chain| {
                chain
                    .windows(2)
                    .map(|pair| (pair[0].clone(), pair[1].clone()))
            })
            .collect();

        Self { nodes, edges }
    }

    /// Nodes in authored order: ingredients first, then activities.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Flattened `(from, to)` pairs; `(A, B)` means A comes before B.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }
}
