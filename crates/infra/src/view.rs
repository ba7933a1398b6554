//! Load-once view state for the catalog and listing detail pages.
//!
//! A view fetches from the store when it is activated and holds the result for
//! its lifetime. A failed fetch leaves the collection empty and raises a
//! notification; it never propagates as an error.

use std::sync::Arc;

use agentmart_auth::{Session, can_add_listings};
use agentmart_catalog::{CatalogConfig, CatalogQuery, Listing, category_counts};
use agentmart_core::ListingId;

use crate::listing_store::ListingStore;
use crate::notification::Notification;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    /// Fetch failed; the listing collection is empty and a retry is offered.
    Failed,
}

/// Catalog page state: the fetched listings plus the memoized query over them.
#[derive(Debug)]
pub struct CatalogView<S> {
    store: S,
    catalog: CatalogQuery,
    state: LoadState,
    notification: Option<Notification>,
}

impl<S> CatalogView<S>
where
    S: ListingStore,
{
    /// Activate the view: fetch active listings once.
    pub async fn load(store: S, config: &CatalogConfig) -> Self {
        let mut view = Self {
            store,
            catalog: CatalogQuery::new(Vec::new(), config),
            state: LoadState::Ready,
            notification: None,
        };
        view.fetch().await;
        view
    }

    /// Re-fetch after a failure (the "try again" action). Criteria and sort
    /// mode are kept.
    pub async fn retry(&mut self) {
        self.fetch().await;
    }

    async fn fetch(&mut self) {
        match self.store.fetch_active_listings().await {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "catalog loaded");
                self.catalog.set_listings(listings);
                self.state = LoadState::Ready;
                self.notification = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching products");
                self.catalog.set_listings(Vec::new());
                self.state = LoadState::Failed;
                self.notification = Some(Notification::load_failed());
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Query state; the page edits criteria and sort mode through this.
    pub fn catalog(&mut self) -> &mut CatalogQuery {
        &mut self.catalog
    }

    pub fn results(&mut self) -> Arc<[Listing]> {
        self.catalog.results()
    }

    /// Category facets over the whole fetched collection (not the filtered one).
    pub fn categories(&self) -> Vec<(String, usize)> {
        category_counts(self.catalog.listings()).into_iter().collect()
    }

    /// Whether to offer the "add listing" action to the acting user.
    pub fn shows_add_listing(&self, session: Option<&Session>) -> bool {
        can_add_listings(session)
    }
}

/// Outcome of loading one listing by the id in the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingDetail {
    Found(Listing),
    NotFound,
    Failed(Notification),
}

impl ListingDetail {
    pub async fn load<S>(store: &S, id: ListingId) -> Self
    where
        S: ListingStore + ?Sized,
    {
        match store.fetch_listing(id).await {
            Ok(Some(listing)) => ListingDetail::Found(listing),
            Ok(None) => {
                tracing::info!(listing_id = %id, "listing not found");
                ListingDetail::NotFound
            }
            Err(e) => {
                tracing::error!(listing_id = %id, error = %e, "error fetching listing");
                ListingDetail::Failed(Notification::error(
                    "Failed to load product details. Please try again.",
                ))
            }
        }
    }

    /// Parse the URL segment first; an unparsable id is simply not found.
    pub async fn load_from_path<S>(store: &S, segment: &str) -> Self
    where
        S: ListingStore + ?Sized,
    {
        match segment.parse::<ListingId>() {
            Ok(id) => Self::load(store, id).await,
            Err(e) => {
                tracing::debug!(segment, error = %e, "unparsable listing id");
                ListingDetail::NotFound
            }
        }
    }
}
