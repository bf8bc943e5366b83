// src/render/layout.rs

//! Pluggable graph-layout engine abstraction.
//!
//! The site assembler talks to a [`LayoutEngine`] instead of spawning
//! Graphviz directly. This keeps the subprocess boundary in one place and
//! makes it easy to swap in a fake engine in tests.
//!
//! - [`GraphvizLayout`] is the production implementation: a blocking `dot`
//!   subprocess fed DOT text on stdin, returning SVG from stdout.
//! - Tests can provide their own `LayoutEngine` that produces deterministic
//!   SVG without an external process.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;
use tracing::debug;

use crate::errors::{CookdagError, Result};

/// Trait abstracting how an abstract graph description becomes SVG.
pub trait LayoutEngine {
    /// Render DOT text to SVG markup.
    ///
    /// Node `id` attributes in the input must be preserved on the SVG node
    /// elements; the in-page script addresses nodes by them.
    fn render_svg(&self, dot: &str) -> Result<String>;
}

/// Real layout engine used in production: Graphviz `dot -Tsvg`.
///
/// The subprocess is blocking; a non-zero exit aborts the build with the
/// captured stderr in the error.
pub struct GraphvizLayout {
    program: String,
}

impl GraphvizLayout {
    pub fn new() -> Self {
        Self {
            program: "dot".to_string(),
        }
    }

    /// Use a different Graphviz binary (e.g. an absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GraphvizLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine for GraphvizLayout {
    fn render_svg(&self, dot: &str) -> Result<String> {
        debug!(program = %self.program, bytes = dot.len(), "invoking layout engine");

        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawning layout engine '{}'", self.program))?;

        // Scope the handle so stdin closes before we wait on the child.
        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| CookdagError::LayoutError("layout engine stdin unavailable".into()))?;
            stdin
                .write_all(dot.as_bytes())
                .with_context(|| format!("writing DOT to layout engine '{}'", self.program))?;
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("waiting for layout engine '{}'", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CookdagError::LayoutError(format!(
                "'{} -Tsvg' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            CookdagError::LayoutError(format!(
                "'{} -Tsvg' produced non-UTF-8 output",
                self.program
            ))
        })
    }
}
