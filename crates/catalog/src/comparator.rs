//! Comparator set: one ordering per sort mode.
//!
//! Each comparator is total. Equal keys compare `Equal` so the stable sort in
//! [`crate::query`] keeps the original collection order for ties.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// Sort selector, serialized with the same keys the view uses.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    #[serde(rename = "name")]
    NameAscending,
    PriceLow,
    PriceHigh,
    #[serde(rename = "popular")]
    Popularity,
    #[serde(rename = "rating")]
    RatingDescending,
}

impl SortMode {
    pub const ALL: [SortMode; 7] = [
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::NameAscending,
        SortMode::PriceLow,
        SortMode::PriceHigh,
        SortMode::Popularity,
        SortMode::RatingDescending,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::NameAscending => "name",
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Popularity => "popular",
            SortMode::RatingDescending => "rating",
        }
    }

    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.selector().eq_ignore_ascii_case(selector))
    }

    /// Unknown selectors fall back to the default ordering.
    pub fn from_selector_or_default(selector: &str) -> Self {
        Self::from_selector(selector).unwrap_or_default()
    }

    pub fn comparator(self) -> fn(&Listing, &Listing) -> Ordering {
        match self {
            SortMode::Newest => by_newest,
            SortMode::Oldest => by_oldest,
            SortMode::NameAscending => by_name_ascending,
            SortMode::PriceLow => by_price_ascending,
            SortMode::PriceHigh => by_price_descending,
            SortMode::Popularity => by_popularity,
            SortMode::RatingDescending => by_rating_descending,
        }
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.selector())
    }
}

/// Most recent first; missing timestamps sort last (oldest).
pub fn by_newest(a: &Listing, b: &Listing) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

/// Oldest first; missing timestamps sort first.
pub fn by_oldest(a: &Listing, b: &Listing) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

/// Case-insensitive; a missing name sorts as the empty string.
pub fn by_name_ascending(a: &Listing, b: &Listing) -> Ordering {
    let left = a.name.as_deref().unwrap_or_default().to_lowercase();
    let right = b.name.as_deref().unwrap_or_default().to_lowercase();
    left.cmp(&right)
}

pub fn by_price_ascending(a: &Listing, b: &Listing) -> Ordering {
    a.effective_price().cmp(&b.effective_price())
}

pub fn by_price_descending(a: &Listing, b: &Listing) -> Ordering {
    b.effective_price().cmp(&a.effective_price())
}

/// Most purchased first; missing counts are 0.
pub fn by_popularity(a: &Listing, b: &Listing) -> Ordering {
    b.purchases.unwrap_or(0).cmp(&a.purchases.unwrap_or(0))
}

/// Best rated first; missing ratings are 0.
pub fn by_rating_descending(a: &Listing, b: &Listing) -> Ordering {
    let left = a.rating.unwrap_or(0.0);
    let right = b.rating.unwrap_or(0.0);
    right.total_cmp(&left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentmart_core::{ListingId, Money};
    use chrono::{TimeZone, Utc};

    fn listing(id: u64) -> Listing {
        Listing::new(ListingId::new(id))
    }

    #[test]
    fn selectors_round_trip() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_selector(mode.selector()), Some(mode));
            let json = serde_json::to_value(mode).unwrap();
            assert_eq!(json, serde_json::json!(mode.selector()));
        }
    }

    #[test]
    fn unknown_selector_degrades_to_default() {
        assert_eq!(SortMode::from_selector("cheapest"), None);
        assert_eq!(SortMode::from_selector_or_default("cheapest"), SortMode::Newest);
        assert_eq!(SortMode::from_selector_or_default(" Price-Low "), SortMode::PriceLow);
    }

    #[test]
    fn missing_created_at_is_oldest() {
        let dated = listing(1).with_created_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let undated = listing(2);

        assert_eq!(by_newest(&dated, &undated), Ordering::Less);
        assert_eq!(by_oldest(&undated, &dated), Ordering::Less);
    }

    #[test]
    fn name_compare_ignores_case_and_defaults_to_empty() {
        let lower = listing(1).with_name("alpha");
        let upper = listing(2).with_name("Beta");
        let unnamed = listing(3);

        assert_eq!(by_name_ascending(&lower, &upper), Ordering::Less);
        assert_eq!(by_name_ascending(&unnamed, &lower), Ordering::Less);
        assert_eq!(
            by_name_ascending(&listing(4).with_name("Bot"), &listing(5).with_name("bot")),
            Ordering::Equal
        );
    }

    #[test]
    fn missing_price_compares_as_free() {
        let free = listing(1);
        let paid = listing(2).with_price(Money::from_minor(100));
        assert_eq!(by_price_ascending(&free, &paid), Ordering::Less);
        assert_eq!(by_price_descending(&free, &paid), Ordering::Greater);
        assert_eq!(by_price_ascending(&free, &listing(3).with_price(Money::ZERO)), Ordering::Equal);
    }

    #[test]
    fn popularity_and_rating_are_descending() {
        let popular = listing(1).with_purchases(300).with_rating(4.1);
        let niche = listing(2).with_purchases(5).with_rating(4.9);
        let unknown = listing(3);

        assert_eq!(by_popularity(&popular, &niche), Ordering::Less);
        assert_eq!(by_popularity(&unknown, &niche), Ordering::Greater);
        assert_eq!(by_rating_descending(&niche, &popular), Ordering::Less);
        assert_eq!(by_rating_descending(&unknown, &popular), Ordering::Greater);
    }
}
