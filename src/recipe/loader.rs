// src/recipe/loader.rs

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::recipe::model::{RawRecipe, Recipe};

/// Load a recipe file from a given path and return the raw [`RawRecipe`].
///
/// This only performs YAML deserialization; it does **not** perform semantic
/// validation (edge references, cycles, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRecipe> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let recipe: RawRecipe = serde_yaml::from_str(&contents)?;

    Ok(recipe)
}

/// Load a recipe file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads YAML.
/// - Normalizes shorthand entries (handled by the model).
/// - Checks for:
///   - duplicate node ids across ingredients and activities,
///   - edge chains shorter than 2,
///   - edges referencing undeclared node ids,
///   - cycles in the pairwise dependency graph.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Recipe> {
    let raw = load_from_path(&path)?;
    let recipe = Recipe::try_from(raw)?;
    Ok(recipe)
}
