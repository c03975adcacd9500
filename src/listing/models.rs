//! Listing models: the draft assembled by the resolver, the payload sent to
//! the persistence layer and the denormalized item used in bypass mode.

use super::submission::SubmissionError;
use crate::catalog::{AlbumId, ArtistId, ItemId, MediaType, ReleaseId};
use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type ListingId = u64;

/// Physical condition of the listed unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    #[serde(alias = "m")]
    Mint,
    #[serde(alias = "vg")]
    VeryGood,
    #[serde(alias = "g")]
    Good,
    #[serde(alias = "f")]
    Fair,
    #[serde(alias = "ng")]
    NotGood,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Mint => "mint",
            Quality::VeryGood => "very_good",
            Quality::Good => "good",
            Quality::Fair => "fair",
            Quality::NotGood => "not_good",
        }
    }

    /// Parses both the long names and the short codes used by older clients.
    pub fn parse(s: &str) -> Result<Self, SubmissionError> {
        match s {
            "mint" | "m" => Ok(Quality::Mint),
            "very_good" | "vg" => Ok(Quality::VeryGood),
            "good" | "g" => Ok(Quality::Good),
            "fair" | "f" => Ok(Quality::Fair),
            "not_good" | "ng" => Ok(Quality::NotGood),
            _ => Err(SubmissionError::InvalidQuality(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Available,
    Closed,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SubmissionError> {
        match s {
            "available" => Ok(ListingStatus::Available),
            "closed" => Ok(ListingStatus::Closed),
            _ => Err(SubmissionError::InvalidStatus(s.to_owned())),
        }
    }
}

/// Values a fresh draft starts from.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftDefaults {
    pub seller_id: Option<UserId>,
    pub status: ListingStatus,
    pub price: f64,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        DraftDefaults {
            seller_id: None,
            status: ListingStatus::Available,
            price: 0.0,
        }
    }
}

/// The in-progress listing. `item_id` stays empty until a release with at
/// least one item is selected, or an item is bound directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftListing {
    pub item_id: Option<ItemId>,
    pub seller_id: Option<UserId>,
    pub price: f64,
    pub quality: Option<Quality>,
    pub description: String,
    pub status: ListingStatus,
}

/// Free-form fields of a draft.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftField {
    Price(f64),
    Quality(Option<Quality>),
    Description(String),
}

impl DraftListing {
    pub fn new(defaults: &DraftDefaults) -> Self {
        DraftListing {
            item_id: None,
            seller_id: defaults.seller_id,
            price: defaults.price,
            quality: None,
            description: String::new(),
            status: defaults.status,
        }
    }

    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Price(price) => self.price = price,
            DraftField::Quality(quality) => self.quality = quality,
            DraftField::Description(description) => self.description = description,
        }
    }

    pub fn is_submittable(&self) -> bool {
        self.item_id.is_some()
    }

    /// Turns the draft into the payload accepted by the persistence layer.
    pub fn to_payload(&self) -> Result<ListingPayload, SubmissionError> {
        let item_id = self.item_id.ok_or(SubmissionError::MissingItem)?;
        let seller_id = self.seller_id.ok_or(SubmissionError::MissingSeller)?;
        let quality = self.quality.ok_or(SubmissionError::MissingQuality)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(SubmissionError::InvalidPrice(self.price));
        }
        Ok(ListingPayload {
            item_id,
            seller_id,
            price: self.price,
            quality,
            description: self.description.clone(),
            status: self.status,
        })
    }
}

/// Create-listing payload, every field resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingPayload {
    pub item_id: ItemId,
    pub seller_id: UserId,
    pub price: f64,
    pub quality: Quality,
    pub description: String,
    pub status: ListingStatus,
}

/// A persisted listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub item_id: ItemId,
    pub seller_id: UserId,
    pub price: f64,
    pub quality: Quality,
    pub description: String,
    pub status: ListingStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: UserId,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSummary {
    pub id: ReleaseId,
    pub media_type: MediaType,
    pub variant: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: AlbumId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
}

/// An item with its ancestors denormalized, as served by the item details
/// endpoint. Trusted as consistent, never checked against a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteItem {
    pub id: ItemId,
    pub owner: Owner,
    pub release: ReleaseSummary,
    pub album: AlbumSummary,
    pub artist: ArtistSummary,
}

impl ConcreteItem {
    /// "Artist - Album" heading shown in place of the cascading pickers.
    pub fn title(&self) -> String {
        format!("{} - {}", self.artist.name, self.album.title)
    }

    pub fn subtitle(&self) -> String {
        format!(
            "{} - {}",
            self.release.variant.as_deref().unwrap_or("Standard"),
            self.release.media_type.as_str()
        )
    }
}
