use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;

use agentmart_catalog::Listing;
use agentmart_core::{ListingId, UserId};

use super::{ListingStatus, ListingStore, NewListing, StoreError, decode_rows};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    rows: Vec<(ListingStatus, Listing)>,
}

/// In-memory listing table for tests and the demo.
///
/// Rows keep insertion order, which is the order `fetch_active_listings`
/// returns them in. [`InMemoryListingStore::set_offline`] makes every call fail
/// so error paths can be exercised.
#[derive(Debug, Default)]
pub struct InMemoryListingStore {
    inner: RwLock<Inner>,
    offline: AtomicBool,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed active rows. Ids already present on the listings are kept and the
    /// id counter moves past them.
    pub fn with_active(listings: impl IntoIterator<Item = Listing>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            for listing in listings {
                inner.next_id = inner.next_id.max(listing.id.get());
                inner.rows.push((ListingStatus::Active, listing));
            }
        }
        store
    }

    /// Seed active rows from a JSON array in the backend row shape.
    pub fn from_json_rows(json: &str) -> Result<Self, StoreError> {
        Ok(Self::with_active(decode_rows(json)?))
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Status of a row regardless of visibility.
    pub fn status_of(&self, id: ListingId) -> Option<ListingStatus> {
        let inner = self.inner.read().ok()?;
        inner
            .rows
            .iter()
            .find(|(_, listing)| listing.id == id)
            .map(|(status, _)| *status)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is offline".to_string()));
        }
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl ListingStore for InMemoryListingStore {
    async fn fetch_active_listings(&self) -> Result<Vec<Listing>, StoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .rows
            .iter()
            .filter(|(status, _)| *status == ListingStatus::Active)
            .map(|(_, listing)| listing.clone())
            .collect())
    }

    async fn fetch_listing(&self, id: ListingId) -> Result<Option<Listing>, StoreError> {
        self.ensure_online()?;
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .rows
            .iter()
            .find(|(status, listing)| *status == ListingStatus::Active && listing.id == id)
            .map(|(_, listing)| listing.clone()))
    }

    async fn insert_listing(
        &self,
        new: NewListing,
        owner: UserId,
        status: ListingStatus,
    ) -> Result<Listing, StoreError> {
        self.ensure_online()?;
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Rejected("listing id space exhausted".to_string()))?;
        inner.next_id = id;
        let listing = Listing {
            id: ListingId::new(id),
            name: Some(new.name),
            description: Some(new.description),
            price: Some(new.price),
            currency: Some(new.currency),
            category: Some(new.category),
            kind: Some(new.kind),
            integrations: new.integrations,
            is_ready_to_launch: Some(new.is_ready_to_launch),
            has_free_trial: Some(new.has_free_trial),
            owner: Some(owner),
            vendor: new.vendor,
            demo_url: new.demo_url,
            created_at: Some(Utc::now()),
            ..Listing::default()
        };
        inner.rows.push((status, listing.clone()));

        tracing::debug!(listing_id = %listing.id, ?status, "listing row inserted");
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentmart_core::Money;
    use std::collections::BTreeSet;

    fn new_listing(name: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            description: "does things".to_string(),
            price: Money::from_major(5),
            currency: "USD".to_string(),
            category: "writing".to_string(),
            vendor: None,
            demo_url: None,
            integrations: BTreeSet::new(),
            kind: "agent".to_string(),
            has_free_trial: false,
            is_ready_to_launch: true,
        }
    }

    #[tokio::test]
    async fn only_active_rows_are_visible() {
        let store = InMemoryListingStore::new();
        let owner = UserId::new();
        let live = store
            .insert_listing(new_listing("Live"), owner, ListingStatus::Active)
            .await
            .unwrap();
        let pending = store
            .insert_listing(new_listing("Pending"), owner, ListingStatus::PendingReview)
            .await
            .unwrap();

        let active = store.fetch_active_listings().await.unwrap();
        assert_eq!(active, vec![live.clone()]);
        assert_eq!(store.fetch_listing(live.id).await.unwrap(), Some(live));
        assert_eq!(store.fetch_listing(pending.id).await.unwrap(), None);
        assert_eq!(store.status_of(pending.id), Some(ListingStatus::PendingReview));
    }

    #[tokio::test]
    async fn insert_assigns_ids_after_seeded_rows() {
        let store = InMemoryListingStore::with_active([Listing::new(ListingId::new(10))]);
        let inserted = store
            .insert_listing(new_listing("Next"), UserId::new(), ListingStatus::Active)
            .await
            .unwrap();
        assert_eq!(inserted.id, ListingId::new(11));
        assert!(inserted.created_at.is_some());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn insert_after_max_id_is_rejected() {
        let store = InMemoryListingStore::with_active([Listing::new(ListingId::new(u64::MAX))]);
        let result = store
            .insert_listing(new_listing("Overflow"), UserId::new(), ListingStatus::Active)
            .await;
        assert!(matches!(result, Err(StoreError::Rejected(_))));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn offline_store_fails_every_call() {
        let store = InMemoryListingStore::with_active([Listing::new(ListingId::new(1))]);
        store.set_offline(true);
        assert!(matches!(
            store.fetch_active_listings().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.fetch_listing(ListingId::new(1)).await.is_err());

        store.set_offline(false);
        assert_eq!(store.fetch_active_listings().await.unwrap().len(), 1);
    }
}
