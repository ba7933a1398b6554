//! Filter criteria owned by the view and passed into the query engine.
//!
//! Criteria are plain data. Malformed values (negative ratings, inverted price
//! bounds, unparsable slider input) never error; they read as "unconstrained".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agentmart_core::{Money, ValueObject};

use crate::config::CatalogConfig;
use crate::listing::Integration;

/// Inclusive price bounds in minor units. `max: None` is unbounded.
///
/// Deserialization goes through [`PriceRange::new`], so an inverted range read
/// from the wire is unbounded too.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPriceRange")]
pub struct PriceRange {
    min: Money,
    max: Option<Money>,
}

#[derive(Deserialize)]
struct RawPriceRange {
    #[serde(default)]
    min: Money,
    #[serde(default)]
    max: Option<Money>,
}

impl From<RawPriceRange> for PriceRange {
    fn from(raw: RawPriceRange) -> Self {
        PriceRange::new(raw.min, raw.max)
    }
}

impl ValueObject for PriceRange {}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl PriceRange {
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: Money::ZERO,
        max: None,
    };

    /// Build from minor-unit bounds. An inverted range is treated as unbounded.
    pub fn new(min: Money, max: Option<Money>) -> Self {
        match max {
            Some(max) if max < min => Self::UNBOUNDED,
            _ => Self { min, max },
        }
    }

    /// Build from whole major-unit bounds (what the price slider reports).
    pub fn from_major(min: u64, max: u64) -> Self {
        Self::new(Money::from_major(min), Some(Money::from_major(max)))
    }

    pub fn at_least(min: Money) -> Self {
        Self::new(min, None)
    }

    /// Parse user-entered major-unit bounds. Each side that is empty or not a
    /// non-negative number falls back to its unconstrained value.
    pub fn parse_major(min: &str, max: &str) -> Self {
        let min = Money::parse_major(min).unwrap_or(Money::ZERO);
        let max = Money::parse_major(max).ok();
        Self::new(min, max)
    }

    pub fn min(&self) -> Money {
        self.min
    }

    pub fn max(&self) -> Option<Money> {
        self.max
    }

    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_free() && self.max.is_none()
    }
}

/// Integration toggles exposed by the filter sidebar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationFlag {
    Api,
    Webhooks,
    Zapier,
}

impl IntegrationFlag {
    pub const ALL: [IntegrationFlag; 3] = [
        IntegrationFlag::Api,
        IntegrationFlag::Webhooks,
        IntegrationFlag::Zapier,
    ];

    /// Capability tag implied by this flag.
    pub fn integration(self) -> Integration {
        match self {
            IntegrationFlag::Api => Integration::Api,
            IntegrationFlag::Webhooks => Integration::Webhooks,
            IntegrationFlag::Zapier => Integration::Zapier,
        }
    }
}

/// Named integration booleans. No flag set means no restriction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationFlags {
    pub api: bool,
    pub webhooks: bool,
    pub zapier: bool,
}

impl IntegrationFlags {
    pub fn is_set(&self, flag: IntegrationFlag) -> bool {
        match flag {
            IntegrationFlag::Api => self.api,
            IntegrationFlag::Webhooks => self.webhooks,
            IntegrationFlag::Zapier => self.zapier,
        }
    }

    pub fn set(&mut self, flag: IntegrationFlag, on: bool) {
        match flag {
            IntegrationFlag::Api => self.api = on,
            IntegrationFlag::Webhooks => self.webhooks = on,
            IntegrationFlag::Zapier => self.zapier = on,
        }
    }

    pub fn any_set(&self) -> bool {
        self.api || self.webhooks || self.zapier
    }

    /// Capability tags implied by the flags that are on.
    pub fn requested(&self) -> impl Iterator<Item = Integration> + '_ {
        IntegrationFlag::ALL
            .into_iter()
            .filter(|flag| self.is_set(*flag))
            .map(IntegrationFlag::integration)
    }
}

/// The current set of user-chosen filters.
///
/// `Default` is the fully unconstrained criteria: every listing passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, description, category.
    pub search_term: String,
    /// Accepted category labels; empty means any category.
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    /// Inclusive lower bound; 0 (or anything non-positive) is unconstrained.
    pub min_rating: f64,
    pub integrations: IntegrationFlags,
    pub ready_to_launch_only: bool,
}

impl FilterCriteria {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_integration(mut self, flag: IntegrationFlag) -> Self {
        self.integrations.set(flag, true);
        self
    }

    pub fn with_ready_to_launch_only(mut self, only: bool) -> Self {
        self.ready_to_launch_only = only;
        self
    }

    /// Search term as the predicates see it (trimmed, lower-cased).
    pub fn normalized_search(&self) -> String {
        self.search_term.trim().to_lowercase()
    }

    /// Rating bound with malformed values (NaN, negative) read as 0.
    pub fn effective_min_rating(&self) -> f64 {
        if self.min_rating.is_finite() && self.min_rating > 0.0 {
            self.min_rating
        } else {
            0.0
        }
    }

    pub fn toggle_category(&mut self, category: &str, checked: bool) {
        if checked {
            self.categories.insert(category.to_string());
        } else {
            self.categories.remove(category);
        }
    }

    /// Apply a price slider position. The slider's top stop means "no ceiling".
    pub fn set_price_slider(&mut self, min_major: u64, max_major: u64, config: &CatalogConfig) {
        self.price_range = config.slider_range(min_major, max_major);
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.min_rating = min_rating;
    }

    pub fn set_integration(&mut self, flag: IntegrationFlag, on: bool) {
        self.integrations.set(flag, on);
    }

    pub fn set_ready_to_launch(&mut self, only: bool) {
        self.ready_to_launch_only = only;
    }

    /// "Clear All": back to unconstrained.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_empty()
            && self.categories.is_empty()
            && self.price_range.is_unbounded()
            && self.effective_min_rating() == 0.0
            && !self.integrations.any_set()
            && !self.ready_to_launch_only
    }

    /// Labels for the "Active Filters" chips.
    pub fn active_filter_badges(&self, config: &CatalogConfig) -> Vec<String> {
        let mut badges: Vec<String> = self.categories.iter().cloned().collect();

        if !self.price_range.is_unbounded() {
            let ceiling = Money::from_major(config.price_ceiling_major);
            let max = self.price_range.max().unwrap_or(ceiling);
            badges.push(format!(
                "{}-{}",
                self.price_range.min().display_dollars(),
                max.display_dollars()
            ));
        }

        let rating = self.effective_min_rating();
        if rating > 0.0 {
            badges.push(format!("{rating}+ stars"));
        }

        badges.extend(self.integrations.requested().map(|i| i.label().to_string()));

        if self.ready_to_launch_only {
            badges.push("Ready to launch".to_string());
        }

        badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_unconstrained() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unconstrained());
        assert!(criteria.active_filter_badges(&CatalogConfig::default()).is_empty());
    }

    #[test]
    fn whitespace_search_is_unconstrained() {
        let criteria = FilterCriteria::default().with_search("   ");
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn price_range_is_inclusive() {
        let range = PriceRange::from_major(5, 15);
        assert!(range.contains(Money::from_minor(500)));
        assert!(range.contains(Money::from_minor(1500)));
        assert!(!range.contains(Money::from_minor(499)));
        assert!(!range.contains(Money::from_minor(1501)));
    }

    #[test]
    fn inverted_price_range_is_unbounded() {
        assert!(PriceRange::from_major(20, 10).is_unbounded());
    }

    #[test]
    fn deserialized_inverted_range_is_unconstrained() {
        let criteria: FilterCriteria = serde_json::from_value(serde_json::json!({
            "search_term": "",
            "categories": [],
            "price_range": { "min": 2000, "max": 1000 },
            "min_rating": 0.0,
            "integrations": { "api": false, "webhooks": false, "zapier": false },
            "ready_to_launch_only": false
        }))
        .unwrap();
        assert_eq!(criteria.price_range, PriceRange::UNBOUNDED);
        assert!(criteria.is_unconstrained());

        let listings = [agentmart_core::ListingId::new(1)]
            .map(|id| crate::listing::Listing::new(id).with_price(Money::from_minor(500)));
        let results = crate::query::query(&listings, &criteria, crate::comparator::SortMode::Newest);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn deserialized_range_keeps_valid_bounds() {
        let range: PriceRange = serde_json::from_str(r#"{ "min": 500, "max": null }"#).unwrap();
        assert_eq!(range, PriceRange::at_least(Money::from_minor(500)));
    }

    #[test]
    fn parse_major_degrades_malformed_bounds() {
        let range = PriceRange::parse_major("abc", "10");
        assert_eq!(range.min(), Money::ZERO);
        assert_eq!(range.max(), Some(Money::from_major(10)));

        let range = PriceRange::parse_major("5", "");
        assert_eq!(range.min(), Money::from_major(5));
        assert_eq!(range.max(), None);

        assert!(PriceRange::parse_major("-3", "lots").is_unbounded());
    }

    #[test]
    fn malformed_rating_reads_as_zero() {
        assert_eq!(FilterCriteria::default().with_min_rating(f64::NAN).effective_min_rating(), 0.0);
        assert_eq!(FilterCriteria::default().with_min_rating(-2.0).effective_min_rating(), 0.0);
        assert_eq!(FilterCriteria::default().with_min_rating(4.2).effective_min_rating(), 4.2);
    }

    #[test]
    fn toggling_categories_adds_and_removes() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("writing", true);
        criteria.toggle_category("analytics", true);
        criteria.toggle_category("writing", false);
        assert_eq!(
            criteria.categories.iter().collect::<Vec<_>>(),
            vec!["analytics"]
        );
    }

    #[test]
    fn slider_top_stop_removes_ceiling() {
        let config = CatalogConfig::default();
        let mut criteria = FilterCriteria::default();

        criteria.set_price_slider(0, config.price_ceiling_major, &config);
        assert!(criteria.price_range.is_unbounded());

        criteria.set_price_slider(10, 50, &config);
        assert_eq!(criteria.price_range, PriceRange::from_major(10, 50));
    }

    #[test]
    fn requested_integrations_follow_flags() {
        let mut flags = IntegrationFlags::default();
        assert!(!flags.any_set());
        flags.set(IntegrationFlag::Zapier, true);
        flags.set(IntegrationFlag::Api, true);
        let tags: Vec<Integration> = flags.requested().collect();
        assert_eq!(tags, vec![Integration::Api, Integration::Zapier]);
    }

    #[test]
    fn badges_describe_active_filters() {
        let config = CatalogConfig::default();
        let criteria = FilterCriteria::default()
            .with_category("writing")
            .with_price_range(PriceRange::at_least(Money::from_major(5)))
            .with_min_rating(4.0)
            .with_integration(IntegrationFlag::Webhooks)
            .with_ready_to_launch_only(true);

        assert_eq!(
            criteria.active_filter_badges(&config),
            vec![
                "writing".to_string(),
                "$5-$500".to_string(),
                "4+ stars".to_string(),
                "Webhooks".to_string(),
                "Ready to launch".to_string(),
            ]
        );
    }

    #[test]
    fn clear_restores_defaults() {
        let mut criteria = FilterCriteria::default()
            .with_search("bot")
            .with_category("writing")
            .with_ready_to_launch_only(true);
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
