//! Structural checks for a catalog tree.
//!
//! None of these problems prevent a snapshot from being built, they are
//! reported so the data layer can fix the tree it serves.

use super::models::Artist;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    DuplicateId {
        entity_type: &'static str,
        id: u64,
    },
    EmptyField {
        entity_type: &'static str,
        id: u64,
        field: &'static str,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateId { entity_type, id } => {
                write!(f, "{} with id '{}' appears more than once", entity_type, id)
            }
            Problem::EmptyField {
                entity_type,
                id,
                field,
            } => {
                write!(
                    f,
                    "Field '{}' of {} '{}' is required but was empty",
                    field, entity_type, id
                )
            }
        }
    }
}

fn check_unique(
    seen: &mut HashSet<u64>,
    entity_type: &'static str,
    id: u64,
    out: &mut Vec<Problem>,
) {
    if !seen.insert(id) {
        out.push(Problem::DuplicateId { entity_type, id });
    }
}

/// Walks the whole tree once and collects every structural problem found.
pub fn check_tree(artists: &[Artist]) -> Vec<Problem> {
    let mut problems = vec![];
    let mut artist_ids = HashSet::new();
    let mut album_ids = HashSet::new();
    let mut release_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for artist in artists {
        check_unique(&mut artist_ids, "artist", artist.id, &mut problems);
        if artist.name.trim().is_empty() {
            problems.push(Problem::EmptyField {
                entity_type: "artist",
                id: artist.id,
                field: "name",
            });
        }
        for album in &artist.albums {
            check_unique(&mut album_ids, "album", album.id, &mut problems);
            if album.title.trim().is_empty() {
                problems.push(Problem::EmptyField {
                    entity_type: "album",
                    id: album.id,
                    field: "title",
                });
            }
            for release in &album.releases {
                check_unique(&mut release_ids, "release", release.id, &mut problems);
                for item in &release.items {
                    check_unique(&mut item_ids, "item", item.id, &mut problems);
                }
            }
        }
    }
    problems
}
