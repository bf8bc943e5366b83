// src/recipe/model.rs

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Top-level recipe document as read from a YAML file.
///
/// This is a direct mapping of the authored format:
///
/// ```yaml
/// name: Pancakes
///
/// ingredients:
///   flour: Wheat flour
///   egg: {}
///   milk: { label: Whole milk }
///
/// activities:
///   - mix
///   - id: fry
///     label: Fry them
///
/// edges:
///   - [flour, mix, fry]
///   - [egg, mix]
/// ```
///
/// `ingredients` and `activities` accept both a mapping keyed by node id and
/// a plain list; entries in either shape may give an explicit `label` or fall
/// back to the id. `edges` is a list of id chains; a chain `[A, B, C]` means
/// A comes before B and B comes before C.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    /// Display title of the recipe; also the sort key on the index page.
    pub name: String,

    #[serde(default)]
    pub ingredients: NodeSet,

    #[serde(default)]
    pub activities: NodeSet,

    /// Ordered id chains, each of length >= 2.
    #[serde(default)]
    pub edges: Vec<Vec<String>>,
}

/// A set of authored ingredient or activity entries.
///
/// Two authored shapes are accepted and treated identically:
///
/// - a list, where each entry is a bare id string (id == label) or a record
///   with `id` and optional `label`;
/// - a mapping from id to a bare label string, an empty/record value with
///   optional `label`, or nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeSet {
    List(Vec<NodeEntry>),
    Map(NodeMap),
}

impl Default for NodeSet {
    fn default() -> Self {
        NodeSet::List(Vec::new())
    }
}

impl NodeSet {
    /// Normalize every entry into a [`Node`] of the given kind, preserving
    /// authored order. Labels default to the id when absent.
    pub fn normalized(&self, kind: NodeKind) -> Vec<Node> {
        match self {
            NodeSet::List(entries) => entries
                .iter()
                .map(|entry| match entry {
                    NodeEntry::Id(id) => Node::new(id.clone(), id.clone(), kind),
                    NodeEntry::Detailed { id, label } => Node::new(
                        id.clone(),
                        label.clone().unwrap_or_else(|| id.clone()),
                        kind,
                    ),
                })
                .collect(),
            NodeSet::Map(map) => map
                .0
                .iter()
                .map(|(id, value)| {
                    let label = match value {
                        Some(NodeValue::Label(label)) => label.clone(),
                        Some(NodeValue::Record { label: Some(label) }) => label.clone(),
                        Some(NodeValue::Record { label: None }) | None => id.clone(),
                    };
                    Node::new(id.clone(), label, kind)
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NodeSet::List(entries) => entries.is_empty(),
            NodeSet::Map(map) => map.0.is_empty(),
        }
    }
}

/// List-shape entry: bare id string or record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeEntry {
    Id(String),
    Detailed {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
}

/// Mapping-shape value: bare label string or record with optional `label`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Label(String),
    Record {
        #[serde(default)]
        label: Option<String>,
    },
}

/// Order-preserving id -> value mapping.
///
/// A `BTreeMap` would reorder entries by id; graph and dependency-index
/// output must follow authored order, so entries are kept as a plain vector.
#[derive(Debug, Clone, Default)]
pub struct NodeMap(pub Vec<(String, Option<NodeValue>)>);

impl<'de> Deserialize<'de> for NodeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeMapVisitor;

        impl<'de> Visitor<'de> for NodeMapVisitor {
            type Value = NodeMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of node id to label or record")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Option<NodeValue>>()? {
                    entries.push(entry);
                }
                Ok(NodeMap(entries))
            }
        }

        deserializer.deserialize_map(NodeMapVisitor)
    }
}

/// Whether a node is an ingredient or an activity.
///
/// Drives the visual class carried through DOT into the rendered SVG.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Ingredient,
    Activity,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Ingredient => "ingredient",
            NodeKind::Activity => "activity",
        }
    }
}

/// A normalized graph node: unique id, display label, kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: String, label: String, kind: NodeKind) -> Self {
        Self { id, label, kind }
    }
}

/// A validated recipe.
///
/// Guarantees (established by [`crate::recipe::validate`]):
/// - node ids are unique across ingredients and activities combined
/// - every id referenced by an edge chain is a declared node
/// - every chain has length >= 2
/// - the pairwise dependency graph is acyclic
#[derive(Debug, Clone)]
pub struct Recipe {
    name: String,
    nodes: Vec<Node>,
    chains: Vec<Vec<String>>,
}

impl Recipe {
    /// Construct without re-validating. Only `validate` should call this.
    pub(crate) fn new_unchecked(name: String, nodes: Vec<Node>, chains: Vec<Vec<String>>) -> Self {
        Self {
            name,
            nodes,
            chains,
        }
    }

    /// Display title of the recipe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes in authored order: ingredients first, then activities.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Authored edge chains.
    pub fn chains(&self) -> &[Vec<String>] {
        &self.chains
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}
