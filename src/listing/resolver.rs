//! Cascading artist/album/release selection for listing creation.
//!
//! The resolver owns the selected ids and the draft listing. Every operation
//! either fully applies or leaves the state untouched, in which case the
//! caller receives a [`SelectionError`] to surface.

use super::models::{ConcreteItem, DraftDefaults, DraftField, DraftListing};
use crate::catalog::{AlbumId, ArtistId, CatalogSnapshot, ReleaseId};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No catalog snapshot is available")]
    NoSnapshot,

    #[error("Album {album_id} does not belong to artist {artist_id:?}")]
    AlbumNotUnderArtist {
        album_id: AlbumId,
        artist_id: Option<ArtistId>,
    },

    #[error("Release {release_id} does not belong to album {album_id}")]
    ReleaseNotUnderAlbum {
        release_id: ReleaseId,
        album_id: AlbumId,
    },

    #[error("Release {0} is not in the catalog snapshot")]
    ReleaseNotFound(ReleaseId),
}

/// Outcome of an accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transition {
    Changed,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub artist_id: Option<ArtistId>,
    pub album_id: Option<AlbumId>,
    pub release_id: Option<ReleaseId>,
}

/// An entry of a cascading dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: u64,
    pub label: String,
}

/// Everything a UI needs to render the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverView {
    pub selection: Selection,
    pub draft: DraftListing,
    pub bound_item: Option<ConcreteItem>,
    pub artist_options: Vec<SelectOption>,
    pub album_options: Vec<SelectOption>,
    pub release_options: Vec<SelectOption>,
    pub submittable: bool,
}

pub struct SelectionResolver {
    snapshot: Option<Arc<CatalogSnapshot>>,
    defaults: DraftDefaults,
    selection: Selection,
    draft: DraftListing,
    bound_item: Option<ConcreteItem>,
}

impl SelectionResolver {
    pub fn new(snapshot: Option<Arc<CatalogSnapshot>>, defaults: DraftDefaults) -> Self {
        let draft = DraftListing::new(&defaults);
        SelectionResolver {
            snapshot,
            defaults,
            selection: Selection::default(),
            draft,
            bound_item: None,
        }
    }

    pub fn with_snapshot(snapshot: Arc<CatalogSnapshot>, defaults: DraftDefaults) -> Self {
        Self::new(Some(snapshot), defaults)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn draft(&self) -> &DraftListing {
        &self.draft
    }

    pub fn bound_item(&self) -> Option<&ConcreteItem> {
        self.bound_item.as_ref()
    }

    pub fn snapshot(&self) -> Option<&Arc<CatalogSnapshot>> {
        self.snapshot.as_ref()
    }

    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    fn require_snapshot(&self) -> Result<&CatalogSnapshot, SelectionError> {
        self.snapshot.as_deref().ok_or(SelectionError::NoSnapshot)
    }

    // A bound item stops applying once the cascading path takes over.
    fn unbind(&mut self) {
        if self.bound_item.take().is_some() {
            self.draft.seller_id = self.defaults.seller_id;
        }
    }

    fn clear_item(&mut self) {
        self.draft.item_id = None;
        self.unbind();
    }

    fn rejected(err: SelectionError) -> Result<Transition, SelectionError> {
        warn!("Selection rejected: {}", err);
        Err(err)
    }

    /// Selects an artist, or clears it with `None`. Anything below is cleared.
    pub fn select_artist(
        &mut self,
        artist_id: Option<ArtistId>,
    ) -> Result<Transition, SelectionError> {
        if self.selection.artist_id == artist_id {
            return Ok(Transition::Unchanged);
        }
        debug!("Artist selected: {:?}", artist_id);
        self.selection = Selection {
            artist_id,
            album_id: None,
            release_id: None,
        };
        self.clear_item();
        Ok(Transition::Changed)
    }

    /// Selects one of the current artist's albums, or clears it with `None`.
    pub fn select_album(
        &mut self,
        album_id: Option<AlbumId>,
    ) -> Result<Transition, SelectionError> {
        if self.selection.album_id == album_id {
            return Ok(Transition::Unchanged);
        }
        if let Some(id) = album_id {
            let snapshot = match self.require_snapshot() {
                Ok(snapshot) => snapshot,
                Err(err) => return Self::rejected(err),
            };
            if snapshot.find_album(self.selection.artist_id, id).is_none() {
                return Self::rejected(SelectionError::AlbumNotUnderArtist {
                    album_id: id,
                    artist_id: self.selection.artist_id,
                });
            }
        }
        debug!("Album selected: {:?}", album_id);
        self.selection.album_id = album_id;
        self.selection.release_id = None;
        self.clear_item();
        Ok(Transition::Changed)
    }

    /// Selects a release, or clears it with `None`.
    ///
    /// With an album selected the release must belong to it. Without one the
    /// artist and album are inferred from the snapshot instead.
    pub fn select_release(
        &mut self,
        release_id: Option<ReleaseId>,
    ) -> Result<Transition, SelectionError> {
        if self.selection.release_id == release_id {
            return Ok(Transition::Unchanged);
        }
        let Some(id) = release_id else {
            debug!("Release cleared");
            self.selection.release_id = None;
            self.clear_item();
            return Ok(Transition::Changed);
        };
        let snapshot = match self.require_snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => return Self::rejected(err),
        };

        let (selection, item_id) = match self.selection.album_id {
            Some(album_id) => {
                let release = snapshot
                    .releases_of(self.selection.artist_id, Some(album_id))
                    .iter()
                    .find(|r| r.id == id);
                let Some(release) = release else {
                    return Self::rejected(SelectionError::ReleaseNotUnderAlbum {
                        release_id: id,
                        album_id,
                    });
                };
                let selection = Selection {
                    release_id: Some(id),
                    ..self.selection
                };
                // Taken from the album-scoped release, not the global index,
                // so a duplicated release id resolves inside the picked album.
                (selection, release.first_item_id())
            }
            None => match snapshot.ancestors_of_release(id) {
                Some(ancestors) => {
                    let selection = Selection {
                        artist_id: Some(ancestors.artist_id),
                        album_id: Some(ancestors.album_id),
                        release_id: Some(id),
                    };
                    (selection, snapshot.first_item_id_of_release(id))
                }
                None => return Self::rejected(SelectionError::ReleaseNotFound(id)),
            },
        };

        debug!(
            "Release {} selected under artist {:?} album {:?}, item {:?}",
            id, selection.artist_id, selection.album_id, item_id
        );
        self.selection = selection;
        self.unbind();
        self.draft.item_id = item_id;
        Ok(Transition::Changed)
    }

    /// Pre-fills the draft from an item that is already fully known.
    pub fn bind_to_concrete_item(&mut self, item: ConcreteItem) {
        debug!("Draft bound to item {} owned by {}", item.id, item.owner.id);
        self.draft.item_id = Some(item.id);
        self.draft.seller_id = Some(item.owner.id);
        self.bound_item = Some(item);
    }

    pub fn update_draft_field(&mut self, field: DraftField) {
        self.draft.apply(field);
    }

    pub fn reset(&mut self) {
        debug!("Resolver reset");
        self.selection = Selection::default();
        self.draft = DraftListing::new(&self.defaults);
        self.bound_item = None;
    }

    /// Installs a re-fetched snapshot. Selections made against the old one are
    /// discarded.
    pub fn replace_snapshot(&mut self, snapshot: Arc<CatalogSnapshot>) {
        self.snapshot = Some(snapshot);
        self.reset();
    }

    pub fn view(&self) -> ResolverView {
        let snapshot = self.snapshot.as_deref();
        let artist_options: Vec<SelectOption> = snapshot
            .map(|s| s.artists())
            .unwrap_or_default()
            .iter()
            .map(|a| SelectOption {
                id: a.id,
                label: a.name.clone(),
            })
            .collect();
        let album_options: Vec<SelectOption> = snapshot
            .map(|s| s.albums_of(self.selection.artist_id))
            .unwrap_or_default()
            .iter()
            .map(|a| SelectOption {
                id: a.id,
                label: a.title.clone(),
            })
            .collect();
        let release_options: Vec<SelectOption> = snapshot
            .map(|s| s.releases_of(self.selection.artist_id, self.selection.album_id))
            .unwrap_or_default()
            .iter()
            .map(|r| SelectOption {
                id: r.id,
                label: r
                    .variant
                    .clone()
                    .unwrap_or_else(|| r.media_type.as_str().to_owned()),
            })
            .collect();

        ResolverView {
            selection: self.selection,
            draft: self.draft.clone(),
            bound_item: self.bound_item.clone(),
            artist_options,
            album_options,
            release_options,
            submittable: self.is_submittable(),
        }
    }
}
