use serde::{Deserialize, Serialize};

use agentmart_catalog::Listing;
use agentmart_core::{Money, UserId};

/// Developer dashboard totals over one seller's listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    pub total_listings: usize,
    pub total_views: u64,
    pub total_purchases: u64,
    /// Mean over rated listings only; `None` when nothing is rated yet.
    pub average_rating: Option<f64>,
    /// Sum of `price × purchases`, saturating.
    pub gross_earnings: Money,
}

impl SellerStats {
    /// Aggregate the listings published by `owner`.
    pub fn for_owner<'a, I>(listings: I, owner: UserId) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        Self::from_listings(
            listings
                .into_iter()
                .filter(|listing| listing.owner == Some(owner)),
        )
    }

    pub fn from_listings<'a, I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut stats = SellerStats::default();
        let mut rating_sum = 0.0;
        let mut rated = 0u32;

        for listing in listings {
            let purchases = listing.purchases.unwrap_or(0);
            stats.total_listings += 1;
            stats.total_views = stats.total_views.saturating_add(listing.views.unwrap_or(0));
            stats.total_purchases = stats.total_purchases.saturating_add(purchases);
            stats.gross_earnings = stats
                .gross_earnings
                .saturating_add(listing.effective_price().saturating_mul(purchases));

            if let Some(rating) = listing.rating.filter(|r| r.is_finite()) {
                rating_sum += rating;
                rated += 1;
            }
        }

        stats.average_rating = (rated > 0).then(|| rating_sum / f64::from(rated));
        stats
    }
}
