//! Submitting a draft to the persistence layer.

use super::edit::ListingEdit;
use super::models::{Listing, ListingId, ListingPayload, ListingStatus, UserId};
use super::resolver::SelectionResolver;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("No item has been resolved for this listing")]
    MissingItem,

    #[error("No seller is set for this listing")]
    MissingSeller,

    #[error("A quality must be chosen")]
    MissingQuality,

    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Unknown quality '{0}'")]
    InvalidQuality(String),

    #[error("Unknown listing status '{0}'")]
    InvalidStatus(String),

    #[error("Listing {0} not found")]
    ListingNotFound(ListingId),

    #[error("User {user_id} is not the seller of listing {listing_id}")]
    NotOwner {
        listing_id: ListingId,
        user_id: UserId,
    },

    #[error("Listing rejected: {0}")]
    Rejected(String),
}

/// Where listings get persisted.
#[async_trait]
pub trait ListingSink: Send + Sync {
    async fn create_listing(&self, payload: &ListingPayload) -> Result<Listing, SubmissionError>;

    async fn update_listing(&self, edit: &ListingEdit) -> Result<Listing, SubmissionError>;
}

/// Keeps listings in memory, assigning sequential ids.
#[derive(Default)]
pub struct MemoryListingSink {
    listings: Mutex<Vec<Listing>>,
}

impl MemoryListingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn listings(&self) -> Vec<Listing> {
        self.listings.lock().await.clone()
    }
}

#[async_trait]
impl ListingSink for MemoryListingSink {
    async fn create_listing(&self, payload: &ListingPayload) -> Result<Listing, SubmissionError> {
        if !payload.price.is_finite() || payload.price < 0.0 {
            return Err(SubmissionError::InvalidPrice(payload.price));
        }
        let mut listings = self.listings.lock().await;
        if listings
            .iter()
            .any(|l| l.status == ListingStatus::Available && l.item_id == payload.item_id)
        {
            return Err(SubmissionError::Rejected(format!(
                "item {} already has an available listing",
                payload.item_id
            )));
        }
        let listing = Listing {
            id: listings.len() as ListingId + 1,
            item_id: payload.item_id,
            seller_id: payload.seller_id,
            price: payload.price,
            quality: payload.quality,
            description: payload.description.clone(),
            status: payload.status,
        };
        listings.push(listing.clone());
        Ok(listing)
    }

    async fn update_listing(&self, edit: &ListingEdit) -> Result<Listing, SubmissionError> {
        let mut listings = self.listings.lock().await;
        let existing = listings
            .iter_mut()
            .find(|l| l.id == edit.listing_id())
            .ok_or(SubmissionError::ListingNotFound(edit.listing_id()))?;
        let updated = edit.apply_to(existing)?;
        *existing = updated.clone();
        Ok(updated)
    }
}

/// One listing-creation modal: a resolver plus the sink its draft goes to.
pub struct ListingSession {
    resolver: SelectionResolver,
    sink: Arc<dyn ListingSink>,
}

impl ListingSession {
    pub fn new(resolver: SelectionResolver, sink: Arc<dyn ListingSink>) -> Self {
        ListingSession { resolver, sink }
    }

    pub fn resolver(&self) -> &SelectionResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut SelectionResolver {
        &mut self.resolver
    }

    /// Sends the draft. The resolver is reset only once the listing is
    /// created, a failed submit keeps everything the user entered.
    pub async fn submit(&mut self) -> Result<Listing, SubmissionError> {
        let payload = self.resolver.draft().to_payload()?;
        match self.sink.create_listing(&payload).await {
            Ok(listing) => {
                info!("Created listing {} for item {}", listing.id, listing.item_id);
                self.resolver.reset();
                Ok(listing)
            }
            Err(err) => {
                warn!("Failed to create listing: {}", err);
                Err(err)
            }
        }
    }

    /// Discards the draft, as when the modal is closed.
    pub fn close(&mut self) {
        self.resolver.reset();
    }
}
