// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod recipe;
pub mod render;
pub mod site;

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::graph::{classify, DependencyIndex, GraphDescription, NodeClass};
use crate::render::GraphvizLayout;
use crate::site::SiteOptions;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - site options (the fixed directory contract)
/// - the Graphviz layout engine
/// - the site assembler
pub fn run(args: CliArgs) -> Result<()> {
    let opts = SiteOptions::default();

    match args.command {
        Command::Build { dry_run } => {
            if dry_run {
                print_dry_run(&opts)?;
                return Ok(());
            }
            let layout = GraphvizLayout::new();
            let summary = site::build_site(&opts, &layout)?;
            debug!(pages = summary.pages.len(), "build command done");
            Ok(())
        }
        Command::Clean => {
            site::clean_site(&opts)?;
            Ok(())
        }
    }
}

/// Dry-run output: load and validate every recipe, print its nodes with
/// their dependencies, and which nodes are actionable before anything is
/// done. No layout engine, no file writes.
fn print_dry_run(opts: &SiteOptions) -> Result<()> {
    let sources = site::discover_recipes(&opts.recipes_dir)?;
    println!("cookdag dry-run ({} recipes)", sources.len());

    for source in &sources {
        let recipe = recipe::load_and_validate(source)?;
        let desc = GraphDescription::from_recipe(&recipe);
        let deps = DependencyIndex::from_edges(desc.edges());

        println!();
        println!("{} ({})", recipe.name(), source.display());
        for node in desc.nodes() {
            let dep_ids = deps.dependencies_of(&node.id);
            if dep_ids.is_empty() {
                println!("  - {} [{}]", node.id, node.kind.as_str());
            } else {
                println!(
                    "  - {} [{}] after {}",
                    node.id,
                    node.kind.as_str(),
                    dep_ids.join(", ")
                );
            }
        }

        let none_done = BTreeSet::new();
        let actionable: Vec<String> = classify(&none_done, &deps, recipe.node_ids())
            .into_iter()
            .filter(|(_, class)| *class == NodeClass::Todo)
            .map(|(id, _)| id)
            .collect();
        println!("  actionable at start: {}", actionable.join(", "));
    }

    debug!("dry-run complete (no rendering)");
    Ok(())
}
