// src/site/assembler.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::errors::Result;
use crate::graph::{dot, DependencyIndex, GraphDescription};
use crate::recipe;
use crate::render::{IndexEntry, LayoutEngine, PageRenderer};
use crate::site::options::SiteOptions;

/// What a build produced, for logging and tests.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Rendered recipe pages, in render order.
    pub pages: Vec<PathBuf>,
}

/// Build the whole site: every recipe page, the index page, and the static
/// files. Everything is regenerated on every invocation; there is no
/// source/output dependency tracking.
///
/// Recipes render strictly sequentially; the first failure of any kind
/// aborts the build. Already-written files are left in place.
pub fn build_site(opts: &SiteOptions, layout: &dyn LayoutEngine) -> Result<BuildSummary> {
    let sources = discover_recipes(&opts.recipes_dir)?;
    info!(
        recipes = sources.len(),
        dir = %opts.recipes_dir.display(),
        "starting site build"
    );

    fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating output directory '{}'", opts.out_dir.display()))?;

    let renderer = PageRenderer::new()?;

    let mut entries = Vec::with_capacity(sources.len());
    let mut pages = Vec::with_capacity(sources.len());

    for source in &sources {
        let recipe = recipe::load_and_validate(source)?;
        info!(recipe = %recipe.name(), source = %source.display(), "rendering recipe");

        let desc = GraphDescription::from_recipe(&recipe);
        let svg = layout.render_svg(&dot::to_dot_string(&desc))?;
        let deps = DependencyIndex::from_edges(desc.edges());
        let html = renderer.render_recipe(recipe.name(), &svg, &deps)?;

        let out = opts.output_path(source);
        fs::write(&out, html)
            .with_context(|| format!("writing page '{}'", out.display()))?;

        entries.push(IndexEntry {
            title: recipe.name().to_string(),
            href: out
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        });
        pages.push(out);
    }

    // Index links are ordered by recipe title, not by filename.
    entries.sort_by(|a, b| a.title.cmp(&b.title));

    let index_path = opts.out_dir.join("index.html");
    fs::write(&index_path, renderer.render_index(&entries)?)
        .with_context(|| format!("writing index page '{}'", index_path.display()))?;

    copy_static(opts)?;

    info!(pages = pages.len(), out = %opts.out_dir.display(), "site build finished");
    Ok(BuildSummary { pages })
}

/// Remove the output directory. Missing output is not an error.
pub fn clean_site(opts: &SiteOptions) -> Result<()> {
    match fs::remove_dir_all(&opts.out_dir) {
        Ok(()) => {
            info!(out = %opts.out_dir.display(), "removed output directory");
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(out = %opts.out_dir.display(), "output directory already absent");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// List recipe sources: `*.yaml` / `*.yml` directly inside `dir`, sorted by
/// filename for deterministic builds.
pub fn discover_recipes(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading recipes directory '{}'", dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading recipes directory '{}'", dir.display()))?
            .path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");
        if path.is_file() && is_yaml {
            sources.push(path);
        }
    }
    sources.sort();

    if sources.is_empty() {
        warn!(dir = %dir.display(), "no recipe files found");
    }
    Ok(sources)
}

/// Copy the shared stylesheet and the assets directory into the output tree.
///
/// The stylesheet is required (every page imports it); a missing assets
/// directory is skipped with a warning.
fn copy_static(opts: &SiteOptions) -> Result<()> {
    let css_name = opts.stylesheet.file_name().ok_or_else(|| {
        anyhow::anyhow!(
            "stylesheet path '{}' has no file name",
            opts.stylesheet.display()
        )
    })?;
    let css_out = opts.out_dir.join(css_name);
    fs::copy(&opts.stylesheet, &css_out).with_context(|| {
        format!(
            "copying stylesheet '{}' to '{}'",
            opts.stylesheet.display(),
            css_out.display()
        )
    })?;

    if !opts.assets_dir.is_dir() {
        warn!(assets = %opts.assets_dir.display(), "assets directory absent; skipping copy");
        return Ok(());
    }

    let assets_name = opts.assets_dir.file_name().ok_or_else(|| {
        anyhow::anyhow!(
            "assets path '{}' has no directory name",
            opts.assets_dir.display()
        )
    })?;
    let assets_out = opts.out_dir.join(assets_name);
    copy_dir_recursive(&opts.assets_dir, &assets_out)?;

    debug!(out = %opts.out_dir.display(), "static files copied");
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.with_context(|| format!("walking assets directory '{}'", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating directory '{}'", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "copying '{}' to '{}'",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}
