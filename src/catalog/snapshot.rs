use super::models::{
    Album, AlbumId, Artist, ArtistId, CatalogTree, Item, ItemId, Release, ReleaseId,
};
use super::validation::Problem;
use std::collections::HashMap;

/// Position of a release inside the nested tree.
#[derive(Debug, Clone, Copy)]
struct ReleaseLocation {
    artist: usize,
    album: usize,
    release: usize,
}

/// Ancestors of a release, as found in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseAncestors {
    pub artist_id: ArtistId,
    pub album_id: AlbumId,
}

/// Read-only view over one catalog tree.
///
/// Built once per listing session. Lookups by release id go through an index
/// computed at build time, so resolving a release back to its artist and album
/// never scans the tree. When ids are duplicated across branches the first
/// occurrence wins.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    artists: Vec<Artist>,
    artists_index: HashMap<ArtistId, usize>,
    releases_index: HashMap<ReleaseId, ReleaseLocation>,
}

pub struct SnapshotBuildResult {
    pub snapshot: CatalogSnapshot,
    pub problems: Vec<Problem>,
}

impl CatalogSnapshot {
    pub fn build(artists: Vec<Artist>) -> SnapshotBuildResult {
        #[cfg(not(feature = "no_checks"))]
        let problems = super::validation::check_tree(&artists);
        #[cfg(feature = "no_checks")]
        let problems = vec![];

        let mut artists_index = HashMap::new();
        let mut releases_index = HashMap::new();
        for (artist_pos, artist) in artists.iter().enumerate() {
            artists_index.entry(artist.id).or_insert(artist_pos);
            for (album_pos, album) in artist.albums.iter().enumerate() {
                for (release_pos, release) in album.releases.iter().enumerate() {
                    releases_index
                        .entry(release.id)
                        .or_insert(ReleaseLocation {
                            artist: artist_pos,
                            album: album_pos,
                            release: release_pos,
                        });
                }
            }
        }

        SnapshotBuildResult {
            snapshot: CatalogSnapshot {
                artists,
                artists_index,
                releases_index,
            },
            problems,
        }
    }

    pub fn from_tree(tree: CatalogTree) -> SnapshotBuildResult {
        Self::build(tree.artists)
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn find_artist(&self, artist_id: ArtistId) -> Option<&Artist> {
        self.artists_index
            .get(&artist_id)
            .map(|pos| &self.artists[*pos])
    }

    /// Albums owned by the given artist, empty when the artist is unset or unknown.
    pub fn albums_of(&self, artist_id: Option<ArtistId>) -> &[Album] {
        artist_id
            .and_then(|id| self.find_artist(id))
            .map(|artist| artist.albums.as_slice())
            .unwrap_or_default()
    }

    pub fn find_album(&self, artist_id: Option<ArtistId>, album_id: AlbumId) -> Option<&Album> {
        self.albums_of(artist_id).iter().find(|a| a.id == album_id)
    }

    /// Releases of an album, looked up among the given artist's albums only.
    pub fn releases_of(
        &self,
        artist_id: Option<ArtistId>,
        album_id: Option<AlbumId>,
    ) -> &[Release] {
        album_id
            .and_then(|id| self.find_album(artist_id, id))
            .map(|album| album.releases.as_slice())
            .unwrap_or_default()
    }

    fn locate_release(&self, release_id: ReleaseId) -> Option<(&Artist, &Album, &Release)> {
        let location = self.releases_index.get(&release_id)?;
        let artist = &self.artists[location.artist];
        let album = &artist.albums[location.album];
        Some((artist, album, &album.releases[location.release]))
    }

    pub fn find_release(&self, release_id: ReleaseId) -> Option<&Release> {
        self.locate_release(release_id).map(|(_, _, release)| release)
    }

    pub fn ancestors_of_release(&self, release_id: ReleaseId) -> Option<ReleaseAncestors> {
        self.locate_release(release_id)
            .map(|(artist, album, _)| ReleaseAncestors {
                artist_id: artist.id,
                album_id: album.id,
            })
    }

    pub fn items_of_release(&self, release_id: ReleaseId) -> &[Item] {
        self.find_release(release_id)
            .map(|release| release.items.as_slice())
            .unwrap_or_default()
    }

    pub fn first_item_of_release(&self, release_id: ReleaseId) -> Option<&Item> {
        self.find_release(release_id).and_then(Release::first_item)
    }

    pub fn first_item_id_of_release(&self, release_id: ReleaseId) -> Option<ItemId> {
        self.find_release(release_id).and_then(Release::first_item_id)
    }

    pub fn get_artists_count(&self) -> usize {
        self.artists.len()
    }

    pub fn get_albums_count(&self) -> usize {
        self.artists.iter().map(|a| a.albums.len()).sum()
    }

    pub fn get_releases_count(&self) -> usize {
        self.artists
            .iter()
            .flat_map(|a| a.albums.iter())
            .map(|a| a.releases.len())
            .sum()
    }

    pub fn get_items_count(&self) -> usize {
        self.artists
            .iter()
            .flat_map(|a| a.albums.iter())
            .flat_map(|a| a.releases.iter())
            .map(|r| r.items.len())
            .sum()
    }
}
