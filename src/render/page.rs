// src/render/page.rs

//! HTML page rendering with Tera.
//!
//! Templates are compiled into the binary and registered on a `Tera`
//! instance owned by [`PageRenderer`]; there is no ambient template state.

use serde::Serialize;
use tera::{Context, Tera};

use crate::errors::Result;
use crate::graph::DependencyIndex;

const RECIPE_TEMPLATE: &str = include_str!("templates/recipe.html.tera");
const INDEX_TEMPLATE: &str = include_str!("templates/index.html.tera");

/// One link on the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    /// Recipe title (the index sort key).
    pub title: String,
    /// Relative href of the rendered page.
    pub href: String,
}

/// Renders recipe pages and the index page.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("recipe.html", RECIPE_TEMPLATE)?;
        tera.add_raw_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render one recipe page.
    ///
    /// `svg` is embedded inline and must already be trusted markup (it comes
    /// from the layout engine). The dependency index is serialized to JSON
    /// for the in-page script.
    pub fn render_recipe(&self, title: &str, svg: &str, deps: &DependencyIndex) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("title", title);
        ctx.insert("svg", svg);
        ctx.insert("dependencies", deps);
        Ok(self.tera.render("recipe.html", &ctx)?)
    }

    /// Render the index page. Callers pass entries already sorted by title.
    pub fn render_index(&self, entries: &[IndexEntry]) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("entries", entries);
        Ok(self.tera.render("index.html", &ctx)?)
    }
}
