//! Infrastructure layer: the listing store seam and view lifecycles.
//!
//! The hosted backend owns persistence. This crate defines how the marketplace
//! talks to it ([`ListingStore`]), an in-memory implementation for tests and the
//! demo, and the load-once view state that turns fetch failures into
//! user-visible notifications.

pub mod listing_store;
pub mod notification;
pub mod view;

pub use listing_store::{InMemoryListingStore, ListingStatus, ListingStore, NewListing, StoreError};
pub use notification::{Notification, NotificationVariant};
pub use view::{CatalogView, ListingDetail, LoadState};
