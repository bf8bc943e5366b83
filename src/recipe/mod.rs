// src/recipe/mod.rs

//! Recipe input model, loading and validation.
//!
//! - [`model`] mirrors the authored YAML document and owns shorthand
//!   normalization.
//! - [`loader`] reads a document from disk.
//! - [`validate`] turns a [`model::RawRecipe`] into a checked [`model::Recipe`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{Node, NodeKind, NodeSet, RawRecipe, Recipe};
