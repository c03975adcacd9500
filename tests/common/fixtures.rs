//! Test fixtures: a small catalog with 2 artists, 3 albums, 4 releases, 4 items.

#![allow(dead_code)]

use super::constants::*;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use wax_listing::catalog::{Album, Artist, CatalogSnapshot, CatalogTree, Item, MediaType, Release};
use wax_listing::listing::{DraftDefaults, SelectionResolver};

fn release(id: u64, variant: Option<&str>, media_type: MediaType, items: &[u64]) -> Release {
    Release {
        id,
        variant: variant.map(str::to_owned),
        media_type,
        items: items.iter().map(|id| Item { id: *id }).collect(),
    }
}

pub fn make_catalog_tree() -> CatalogTree {
    CatalogTree {
        artists: vec![
            Artist {
                id: ARTIST_1_ID,
                name: "Radiohead".to_owned(),
                albums: vec![
                    Album {
                        id: ALBUM_1_ID,
                        title: "OK Computer".to_owned(),
                        releases: vec![
                            release(RELEASE_1_ID, Some("UK Press"), MediaType::Vinyl, &[ITEM_1_ID]),
                            release(
                                RELEASE_2_ID,
                                None,
                                MediaType::Cassette,
                                &[ITEM_2_ID, ITEM_3_ID],
                            ),
                        ],
                    },
                    Album {
                        id: ALBUM_2_ID,
                        title: "Kid A".to_owned(),
                        releases: vec![release(RELEASE_3_ID, Some("Digipak"), MediaType::Cd, &[])],
                    },
                ],
            },
            Artist {
                id: ARTIST_2_ID,
                name: "Portishead".to_owned(),
                albums: vec![Album {
                    id: ALBUM_3_ID,
                    title: "Dummy".to_owned(),
                    releases: vec![release(
                        RELEASE_4_ID,
                        Some("Go! Beat"),
                        MediaType::Vinyl,
                        &[ITEM_4_ID],
                    )],
                }],
            },
        ],
    }
}

pub fn make_snapshot() -> Arc<CatalogSnapshot> {
    Arc::new(CatalogSnapshot::from_tree(make_catalog_tree()).snapshot)
}

pub fn make_resolver() -> SelectionResolver {
    SelectionResolver::with_snapshot(
        make_snapshot(),
        DraftDefaults {
            seller_id: Some(SELLER_ID),
            ..Default::default()
        },
    )
}

/// Writes the fixture catalog as JSON.
/// Returns (temp_dir, snapshot_path)
pub fn write_snapshot_file() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_string_pretty(&make_catalog_tree())?)?;
    Ok((dir, path))
}
