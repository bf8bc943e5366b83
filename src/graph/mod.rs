// src/graph/mod.rs

//! Dependency-graph derivation.
//!
//! - [`description`] turns a validated recipe into a normalized node list
//!   plus flattened pairwise edges.
//! - [`dot`] serializes a description to DOT text for the layout engine.
//! - [`deps`] inverts the pairwise edges into a per-node dependency index.
//! - [`ready`] classifies nodes as done/todo/neutral given a done-set; this
//!   is the pure core behind the in-page interactivity.

pub mod deps;
pub mod description;
pub mod dot;
pub mod ready;

pub use deps::DependencyIndex;
pub use description::GraphDescription;
pub use ready::{classify, classify_node, NodeClass};
