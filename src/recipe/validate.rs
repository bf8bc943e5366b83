// src/recipe/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{CookdagError, Result};
use crate::recipe::model::{Node, NodeKind, RawRecipe, Recipe};

impl TryFrom<RawRecipe> for Recipe {
    type Error = crate::errors::CookdagError;

    fn try_from(raw: RawRecipe) -> std::result::Result<Self, Self::Error> {
        let mut nodes = raw.ingredients.normalized(NodeKind::Ingredient);
        nodes.extend(raw.activities.normalized(NodeKind::Activity));

        validate_unique_ids(&raw.name, &nodes)?;
        validate_chains(&raw.name, &nodes, &raw.edges)?;
        validate_acyclic(&raw.name, &raw.edges)?;

        Ok(Recipe::new_unchecked(raw.name, nodes, raw.edges))
    }
}

fn validate_unique_ids(recipe: &str, nodes: &[Node]) -> Result<()> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(CookdagError::RecipeError(format!(
                "recipe '{}' declares node id '{}' more than once \
                 (ingredients and activities share one id namespace)",
                recipe, node.id
            )));
        }
    }
    Ok(())
}

fn validate_chains(recipe: &str, nodes: &[Node], chains: &[Vec<String>]) -> Result<()> {
    let declared: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    for chain in chains {
        if chain.len() < 2 {
            return Err(CookdagError::RecipeError(format!(
                "recipe '{}' has an edge chain {:?} with fewer than 2 entries",
                recipe, chain
            )));
        }
        for id in chain {
            if !declared.contains(id.as_str()) {
                return Err(CookdagError::RecipeError(format!(
                    "recipe '{}' references undeclared node '{}' in edge chain {:?}",
                    recipe, id, chain
                )));
            }
        }
        // Consecutive duplicates would be a self-dependency; reject them here
        // so the cycle check can assume loop-free edges.
        for pair in chain.windows(2) {
            if pair[0] == pair[1] {
                return Err(CookdagError::RecipeError(format!(
                    "recipe '{}' has node '{}' depending on itself in edge chain {:?}",
                    recipe, pair[0], chain
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclic(recipe: &str, chains: &[Vec<String>]) -> Result<()> {
    // Edge direction: earlier chain entry -> later chain entry.
    // For the chain [A, B, C] we add edges A -> B and B -> C.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for chain in chains {
        for pair in chain.windows(2) {
            graph.add_edge(pair[0].as_str(), pair[1].as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(CookdagError::RecipeError(format!(
                "recipe '{}' has a dependency cycle involving node '{}'",
                recipe, node
            )))
        }
    }
}
