// crates/test-utils/src/fake_layout.rs

//! Fake layout engines for tests.
//!
//! [`FakeLayout`] stands in for Graphviz without spawning a process: it
//! emits one SVG group per node id found in the DOT input, preserving the
//! id-attribute contract the in-page script relies on. [`FailingLayout`]
//! always errors, for exercising build-abort paths.

use cookdag::errors::{CookdagError, Result};
use cookdag::render::LayoutEngine;
use tracing::debug;

pub struct FakeLayout;

impl LayoutEngine for FakeLayout {
    fn render_svg(&self, dot: &str) -> Result<String> {
        let ids = extract_node_ids(dot);
        debug!(nodes = ids.len(), "fake layout rendering");

        let mut svg = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\">\n");
        for id in ids {
            svg.push_str(&format!(
                "  <g class=\"node\" id=\"{id}\"><title>{id}</title></g>\n"
            ));
        }
        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

pub struct FailingLayout;

impl LayoutEngine for FailingLayout {
    fn render_svg(&self, _dot: &str) -> Result<String> {
        Err(CookdagError::LayoutError(
            "fake layout engine failure".to_string(),
        ))
    }
}

/// Pull `id="..."` attribute values out of DOT node statements.
fn extract_node_ids(dot: &str) -> Vec<String> {
    let mut ids = Vec::new();
    for line in dot.lines() {
        if let Some(pos) = line.find("id=\"") {
            let rest = &line[pos + 4..];
            if let Some(end) = rest.find('"') {
                ids.push(rest[..end].to_string());
            }
        }
    }
    ids
}
