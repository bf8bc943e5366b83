// src/site/options.rs

use std::path::{Path, PathBuf};

/// Site paths as explicit configuration.
///
/// The CLI always uses the defaults (the fixed-directory contract of the
/// tool); tests and embedders construct their own.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// Directory scanned (non-recursively) for `*.yaml` / `*.yml` recipes.
    pub recipes_dir: PathBuf,
    /// Output directory; created if missing, regenerated on every build.
    pub out_dir: PathBuf,
    /// Shared stylesheet copied next to the rendered pages.
    pub stylesheet: PathBuf,
    /// Static assets directory copied recursively into the output tree.
    /// Skipped with a warning when absent.
    pub assets_dir: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            recipes_dir: PathBuf::from("recipes"),
            out_dir: PathBuf::from("build"),
            stylesheet: PathBuf::from("style.css"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl SiteOptions {
    /// Output path for a recipe source: same base name, `.html` extension,
    /// inside the output directory.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.out_dir.join(format!("{stem}.html"))
    }
}
