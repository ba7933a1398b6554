//! Listing store boundary (the backend's listing table).
//!
//! Reads are one-shot: no retry, no cancellation, no timeout. Callers decide
//! how a failure is surfaced.

pub mod in_memory;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agentmart_catalog::{Integration, Listing};
use agentmart_core::{ListingId, Money, UserId};

pub use in_memory::InMemoryListingStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("listing store unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode listing row: {0}")]
    Decode(String),

    #[error("listing store rejected write: {0}")]
    Rejected(String),
}

/// Publication state of a stored listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Visible in the catalog.
    Active,
    /// Submitted through onboarding, waiting for review.
    PendingReview,
}

/// Validated input for a new listing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub currency: String,
    pub category: String,
    pub vendor: Option<String>,
    pub demo_url: Option<String>,
    pub integrations: BTreeSet<Integration>,
    /// Listing type on the backend (`"agent"` for everything we publish today).
    pub kind: String,
    pub has_free_trial: bool,
    pub is_ready_to_launch: bool,
}

/// Async access to listing rows.
#[async_trait::async_trait]
pub trait ListingStore: Send + Sync {
    /// Every listing currently in [`ListingStatus::Active`].
    async fn fetch_active_listings(&self) -> Result<Vec<Listing>, StoreError>;

    /// A single active listing, `None` if it does not exist or is not public.
    async fn fetch_listing(&self, id: ListingId) -> Result<Option<Listing>, StoreError>;

    /// Insert a row and return it as stored (id and timestamp assigned).
    async fn insert_listing(
        &self,
        listing: NewListing,
        owner: UserId,
        status: ListingStatus,
    ) -> Result<Listing, StoreError>;
}

#[async_trait::async_trait]
impl<S> ListingStore for Arc<S>
where
    S: ListingStore + ?Sized,
{
    async fn fetch_active_listings(&self) -> Result<Vec<Listing>, StoreError> {
        (**self).fetch_active_listings().await
    }

    async fn fetch_listing(&self, id: ListingId) -> Result<Option<Listing>, StoreError> {
        (**self).fetch_listing(id).await
    }

    async fn insert_listing(
        &self,
        listing: NewListing,
        owner: UserId,
        status: ListingStatus,
    ) -> Result<Listing, StoreError> {
        (**self).insert_listing(listing, owner, status).await
    }
}

/// Decode backend rows (a JSON array) into listings.
pub fn decode_rows(json: &str) -> Result<Vec<Listing>, StoreError> {
    serde_json::from_str(json).map_err(|e| StoreError::Decode(e.to_string()))
}
