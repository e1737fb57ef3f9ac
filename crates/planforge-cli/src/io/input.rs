//! Recipe file loading.
//!
//! The wire format matches what the web builder persists: tier as an
//! integer, region code, selection tokens, add-on flags. Unknown selection
//! tokens are dropped (stale catalog revisions are expected) and reported
//! so the caller can warn.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use planforge_core::prelude::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeFile {
    tier: u8,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    selections: Vec<String>,
    #[serde(default)]
    addons: Addons,
}

/// A parsed recipe plus anything dropped while parsing it.
#[derive(Debug)]
pub struct LoadedRecipe {
    pub request: RecipeRequest,
    /// Selection tokens that matched no catalog item.
    pub unknown_ids: Vec<String>,
}

/// Read a recipe from a JSON file, or stdin when `path` is `-`.
pub fn load_recipe(path: &str) -> Result<LoadedRecipe> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading recipe from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading recipe file {path}"))?
    };

    let file: RecipeFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing recipe JSON from {path}"))?;

    let tier = Tier::parse(file.tier)?;
    let region = match &file.region {
        Some(code) => Region::parse(code)?,
        None => Region::default(),
    };
    let (selection, unknown_ids) =
        Selection::from_wire(file.selections.iter().map(String::as_str));

    Ok(LoadedRecipe {
        request: RecipeRequest { tier, region, selection, addons: file.addons },
        unknown_ids,
    })
}
