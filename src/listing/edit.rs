//! Owner-only edits of an existing listing.

use super::models::{Listing, ListingId, ListingStatus, Quality, UserId};
use super::submission::SubmissionError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("User {user_id} is not the seller of listing {listing_id}")]
    NotOwner {
        listing_id: ListingId,
        user_id: UserId,
    },
}

/// Pending changes to the editable fields of a listing.
///
/// The target listing and the editing user are fixed when the edit begins and
/// the seller is checked again when the edit is applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListingEdit {
    pub(crate) listing_id: ListingId,
    pub(crate) editor_id: UserId,
    pub(crate) price: f64,
    pub(crate) quality: Quality,
    pub(crate) description: String,
    pub(crate) status: ListingStatus,
}

impl ListingEdit {
    /// Starts an edit seeded with the current values. Only the seller may edit.
    pub fn begin(listing: &Listing, user_id: UserId) -> Result<Self, EditError> {
        if listing.seller_id != user_id {
            return Err(EditError::NotOwner {
                listing_id: listing.id,
                user_id,
            });
        }
        Ok(ListingEdit {
            listing_id: listing.id,
            editor_id: user_id,
            price: listing.price,
            quality: listing.quality,
            description: listing.description.clone(),
            status: listing.status,
        })
    }

    pub fn listing_id(&self) -> ListingId {
        self.listing_id
    }

    pub fn editor_id(&self) -> UserId {
        self.editor_id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ListingStatus {
        self.status
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Closing a listing frees its item to be listed again.
    pub fn set_status(&mut self, status: ListingStatus) {
        self.status = status;
    }

    pub fn apply_to(&self, listing: &Listing) -> Result<Listing, SubmissionError> {
        if listing.id != self.listing_id {
            return Err(SubmissionError::ListingNotFound(self.listing_id));
        }
        if listing.seller_id != self.editor_id {
            return Err(SubmissionError::NotOwner {
                listing_id: listing.id,
                user_id: self.editor_id,
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(SubmissionError::InvalidPrice(self.price));
        }
        Ok(Listing {
            price: self.price,
            quality: self.quality,
            description: self.description.clone(),
            status: self.status,
            ..listing.clone()
        })
    }
}
