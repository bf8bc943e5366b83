// crates/test-utils/src/builders.rs

use cookdag::recipe::model::{NodeEntry, NodeSet, RawRecipe, Recipe};

/// Builder for in-memory recipes to simplify test setup.
pub struct RecipeBuilder {
    name: String,
    ingredients: Vec<NodeEntry>,
    activities: Vec<NodeEntry>,
    edges: Vec<Vec<String>>,
}

impl RecipeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ingredients: Vec::new(),
            activities: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Bare-string ingredient: id == label.
    pub fn ingredient(mut self, id: &str) -> Self {
        self.ingredients.push(NodeEntry::Id(id.to_string()));
        self
    }

    pub fn labelled_ingredient(mut self, id: &str, label: &str) -> Self {
        self.ingredients.push(NodeEntry::Detailed {
            id: id.to_string(),
            label: Some(label.to_string()),
        });
        self
    }

    /// Bare-string activity: id == label.
    pub fn activity(mut self, id: &str) -> Self {
        self.activities.push(NodeEntry::Id(id.to_string()));
        self
    }

    pub fn labelled_activity(mut self, id: &str, label: &str) -> Self {
        self.activities.push(NodeEntry::Detailed {
            id: id.to_string(),
            label: Some(label.to_string()),
        });
        self
    }

    /// Add an edge chain; `["a", "b", "c"]` means a -> b -> c.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        self.edges.push(ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn build_raw(self) -> RawRecipe {
        RawRecipe {
            name: self.name,
            ingredients: NodeSet::List(self.ingredients),
            activities: NodeSet::List(self.activities),
            edges: self.edges,
        }
    }

    /// Validate and return the checked recipe.
    pub fn build(self) -> Recipe {
        Recipe::try_from(self.build_raw()).expect("builder produced an invalid recipe")
    }
}
