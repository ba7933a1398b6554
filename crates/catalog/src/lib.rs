//! Catalog module: listings and the client-side query engine.
//!
//! Everything here is deterministic and synchronous (no IO). The listing
//! collection comes from the store collaborator in `agentmart-infra`; this crate
//! only filters and orders it.

pub mod comparator;
pub mod config;
pub mod criteria;
pub mod demo_chat;
pub mod facets;
pub mod listing;
pub mod predicate;
pub mod query;

pub use comparator::SortMode;
pub use config::CatalogConfig;
pub use criteria::{FilterCriteria, IntegrationFlag, IntegrationFlags, PriceRange};
pub use demo_chat::{ChatMessage, DemoChat, Speaker};
pub use facets::category_counts;
pub use listing::{Integration, Listing};
pub use query::{CatalogQuery, query};
