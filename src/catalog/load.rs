//! Catalog snapshot loading functionality

use super::{CatalogSnapshot, CatalogTree};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn parse_snapshot(json: &str) -> Result<CatalogSnapshot> {
    let tree: CatalogTree =
        serde_json::from_str(json).context("Catalog tree is not valid JSON.")?;
    let build_result = CatalogSnapshot::from_tree(tree);
    let problems = build_result.problems;
    let snapshot = build_result.snapshot;

    if problems.is_empty() {
        info!("Catalog snapshot checked, no issues found.");
    } else {
        info!("Found {} problems:", problems.len());
        for problem in problems.iter() {
            info!("- {}", problem);
        }
        info!(
            "Catalog snapshot was built, but check the {} non-fatal issues above.",
            problems.len()
        );
    }

    info!(
        "Catalog snapshot has:\n{} artists\n{} albums\n{} releases\n{} items",
        snapshot.get_artists_count(),
        snapshot.get_albums_count(),
        snapshot.get_releases_count(),
        snapshot.get_items_count()
    );
    Ok(snapshot)
}

pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<CatalogSnapshot> {
    let path = path.as_ref();
    info!("Loading catalog snapshot from {:?}...", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog snapshot: {:?}", path))?;
    parse_snapshot(&text).with_context(|| format!("Could not load catalog snapshot {:?}", path))
}
