// src/render/mod.rs

//! Rendering: graph layout via an external engine, and HTML page assembly.
//!
//! - [`layout`] abstracts the graph-layout engine behind a trait so tests
//!   can substitute a fake; production uses Graphviz `dot`.
//! - [`page`] renders the per-recipe page and the index page with Tera.

pub mod layout;
pub mod page;

pub use layout::{GraphvizLayout, LayoutEngine};
pub use page::{IndexEntry, PageRenderer};
