//! Catalog tree models.
//!
//! The tree is strictly four levels deep: an artist owns albums, an album owns
//! releases and a release owns the physical items that can be listed.

use serde::{Deserialize, Serialize};

pub type ArtistId = u64;
pub type AlbumId = u64;
pub type ReleaseId = u64;
pub type ItemId = u64;

/// Physical media of a release.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Vinyl,
    Cassette,
    Cd,
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Vinyl => "vinyl",
            MediaType::Cassette => "cassette",
            MediaType::Cd => "cd",
            MediaType::Other(s) => s,
        }
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "vinyl" => MediaType::Vinyl,
            "cassette" => MediaType::Cassette,
            "cd" => MediaType::Cd,
            _ => MediaType::Other(s),
        }
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.as_str().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: ReleaseId,
    pub variant: Option<String>,
    pub media_type: MediaType,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Release {
    // All items of a release are treated as interchangeable stock.
    pub fn first_item(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn first_item_id(&self) -> Option<ItemId> {
        self.first_item().map(|item| item.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// On-disk and wire shape of a catalog tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogTree {
    pub artists: Vec<Artist>,
}
