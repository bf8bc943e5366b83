// src/graph/dot.rs

//! DOT serialization of a [`GraphDescription`].
//!
//! The layout engine (`dot -Tsvg`) consumes this text. Every node statement
//! carries an `id` attribute, which Graphviz copies onto the SVG group
//! element for that node; the in-page script relies on those ids.

use std::io::{self, Write};

use crate::graph::description::GraphDescription;
use crate::recipe::NodeKind;

/// Write the DOT form of `desc` to `out`.
pub fn write_dot<W: Write>(desc: &GraphDescription, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph recipe {{")?;
    writeln!(out)?;
    writeln!(out, "    bgcolor=transparent")?;
    writeln!(out, "    node [color=transparent]")?;
    writeln!(out)?;

    for node in desc.nodes() {
        let style = match node.kind {
            NodeKind::Ingredient => "",
            NodeKind::Activity => " style=rounded",
        };
        writeln!(
            out,
            "    \"{id}\" [id=\"{id}\" label=\"{label}\" shape=box{style} class={class}]",
            id = escape(&node.id),
            label = escape(&node.label),
            style = style,
            class = node.kind.as_str(),
        )?;
    }

    writeln!(out)?;
    for (from, to) in desc.edges() {
        writeln!(out, "    \"{}\" -> \"{}\"", escape(from), escape(to))?;
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// Convenience wrapper returning the DOT text as a `String`.
pub fn to_dot_string(desc: &GraphDescription) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_dot(desc, &mut buf).expect("writing DOT to an in-memory buffer");
    String::from_utf8(buf).expect("DOT output is valid UTF-8")
}

/// Escape a string for use inside a double-quoted DOT id or attribute.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
