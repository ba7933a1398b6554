//! Read-only aggregates for the seller and buyer dashboards and listing reviews.

pub mod purchases;
pub mod reviews;
pub mod seller_stats;

pub use purchases::{PurchaseRecord, PurchaseStatus, PurchaseSummary};
pub use reviews::{COLLAPSED_REVIEWS, Review, ReviewList, ReviewSummary};
pub use seller_stats::SellerStats;
