//! Catalog view configuration.

use serde::{Deserialize, Serialize};

use agentmart_core::Money;

use crate::comparator::SortMode;
use crate::criteria::PriceRange;

/// Tunables for the catalog filter UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Top stop of the price slider, in whole major units. Selecting it means
    /// "no upper bound".
    pub price_ceiling_major: u64,
    /// Slider step in whole major units.
    pub price_step_major: u64,
    pub default_sort: SortMode,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_ceiling_major: 500,
            price_step_major: 5,
            default_sort: SortMode::Newest,
        }
    }
}

impl CatalogConfig {
    /// Load overrides from `AGENTMART_PRICE_MAX`, `AGENTMART_PRICE_STEP` and
    /// `AGENTMART_DEFAULT_SORT`. Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`], reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("AGENTMART_PRICE_MAX") {
            match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => config.price_ceiling_major = v,
                _ => tracing::warn!(value = %raw, "AGENTMART_PRICE_MAX is not a positive integer; using default"),
            }
        }

        if let Some(raw) = lookup("AGENTMART_PRICE_STEP") {
            match raw.trim().parse::<u64>() {
                Ok(v) if v > 0 => config.price_step_major = v,
                _ => tracing::warn!(value = %raw, "AGENTMART_PRICE_STEP is not a positive integer; using default"),
            }
        }

        if let Some(raw) = lookup("AGENTMART_DEFAULT_SORT") {
            match SortMode::from_selector(&raw) {
                Some(mode) => config.default_sort = mode,
                None => tracing::warn!(value = %raw, "unknown AGENTMART_DEFAULT_SORT; using default"),
            }
        }

        config
    }

    /// Translate a slider position into a price range. Positions are clamped
    /// to the ceiling, and a max at the ceiling leaves the range open-ended.
    pub fn slider_range(&self, min_major: u64, max_major: u64) -> PriceRange {
        let min = min_major.min(self.price_ceiling_major);
        if max_major >= self.price_ceiling_major {
            PriceRange::at_least(Money::from_major(min))
        } else {
            PriceRange::from_major(min, max_major)
        }
    }
}
