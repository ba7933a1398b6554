//! Predicate set: one pure test per filter dimension.
//!
//! Missing listing fields take the most permissive value where a filter could
//! otherwise exclude everything (missing price is free). Search is the
//! exception: an absent field never matches a non-empty term, and an absent
//! ready-to-launch flag counts as not ready.

use std::collections::BTreeSet;

use crate::criteria::{FilterCriteria, IntegrationFlags, PriceRange};
use crate::listing::Listing;

/// `term` is trimmed and lower-cased before matching; an empty term matches
/// everything.
pub fn matches_search(listing: &Listing, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    matches_normalized_search(listing, &term)
}

/// Like [`matches_search`] with `term` already trimmed and lower-cased.
pub(crate) fn matches_normalized_search(listing: &Listing, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    [&listing.name, &listing.description, &listing.category]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(term))
}

pub fn matches_category(listing: &Listing, categories: &BTreeSet<String>) -> bool {
    if categories.is_empty() {
        return true;
    }
    listing
        .category
        .as_ref()
        .is_some_and(|category| categories.contains(category))
}

pub fn matches_price(listing: &Listing, range: &PriceRange) -> bool {
    range.contains(listing.effective_price())
}

/// A non-positive or non-finite bound is unconstrained. Otherwise the listing
/// needs a rating of at least `min_rating`.
pub fn matches_rating(listing: &Listing, min_rating: f64) -> bool {
    if !(min_rating.is_finite() && min_rating > 0.0) {
        return true;
    }
    listing.rating.is_some_and(|rating| rating >= min_rating)
}

/// Passes when no flag is set, or the listing offers at least one requested tag.
pub fn matches_integrations(listing: &Listing, flags: &IntegrationFlags) -> bool {
    if !flags.any_set() {
        return true;
    }
    flags
        .requested()
        .any(|tag| listing.integrations.contains(&tag))
}

pub fn matches_ready_to_launch(listing: &Listing, only: bool) -> bool {
    !only || listing.ready_to_launch()
}

/// Logical AND of every predicate.
pub fn matches_all(listing: &Listing, criteria: &FilterCriteria) -> bool {
    matches_search(listing, &criteria.search_term) && matches_rest(listing, criteria)
}

/// Every predicate except search, for callers that normalized the term once.
pub(crate) fn matches_rest(listing: &Listing, criteria: &FilterCriteria) -> bool {
    matches_category(listing, &criteria.categories)
        && matches_price(listing, &criteria.price_range)
        && matches_rating(listing, criteria.min_rating)
        && matches_integrations(listing, &criteria.integrations)
        && matches_ready_to_launch(listing, criteria.ready_to_launch_only)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::IntegrationFlag;
    use crate::listing::Integration;
    use agentmart_core::{ListingId, Money};

    fn grammar_bot() -> Listing {
        Listing::new(ListingId::new(1))
            .with_name("GrammarBot")
            .with_description("Fixes your prose")
            .with_price(Money::from_minor(500))
            .with_category("writing")
            .with_rating(4.5)
            .with_integrations([Integration::Api, Integration::Zapier])
            .with_ready_to_launch(true)
    }

    #[test]
    fn search_matches_any_text_field_case_insensitively() {
        let listing = grammar_bot();
        assert!(matches_search(&listing, "grammar"));
        assert!(matches_search(&listing, "  PROSE "));
        assert!(matches_search(&listing, "Writ"));
        assert!(!matches_search(&listing, "analytics"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(matches_search(&Listing::new(ListingId::new(9)), ""));
        assert!(matches_search(&Listing::new(ListingId::new(9)), "   "));
    }

    #[test]
    fn absent_fields_never_match_non_empty_search() {
        let bare = Listing::new(ListingId::new(2));
        assert!(!matches_search(&bare, "a"));
        // Display fallbacks are not searchable.
        assert!(!matches_search(&bare, "untitled"));
    }

    #[test]
    fn category_requires_membership_when_restricted() {
        let listing = grammar_bot();
        let mut categories = BTreeSet::new();
        assert!(matches_category(&listing, &categories));

        categories.insert("analytics".to_string());
        assert!(!matches_category(&listing, &categories));

        categories.insert("writing".to_string());
        assert!(matches_category(&listing, &categories));

        assert!(!matches_category(&Listing::new(ListingId::new(3)), &categories));
    }

    #[test]
    fn missing_price_is_treated_as_free() {
        let free = Listing::new(ListingId::new(4));
        assert!(matches_price(&free, &PriceRange::from_major(0, 10)));
        assert!(!matches_price(&free, &PriceRange::from_major(1, 10)));
    }

    #[test]
    fn rating_bound_is_inclusive() {
        let listing = grammar_bot();
        assert!(matches_rating(&listing, 0.0));
        assert!(matches_rating(&listing, 4.5));
        assert!(!matches_rating(&listing, 4.6));
        assert!(!matches_rating(&Listing::new(ListingId::new(5)), 1.0));
        assert!(matches_rating(&Listing::new(ListingId::new(5)), f64::NAN));
    }

    #[test]
    fn integrations_match_any_requested_tag() {
        let listing = grammar_bot();
        let mut flags = IntegrationFlags::default();
        assert!(matches_integrations(&listing, &flags));

        flags.set(IntegrationFlag::Webhooks, true);
        assert!(!matches_integrations(&listing, &flags));

        flags.set(IntegrationFlag::Zapier, true);
        assert!(matches_integrations(&listing, &flags));
    }

    #[test]
    fn ready_to_launch_treats_absent_as_false() {
        let unknown = Listing::new(ListingId::new(6));
        assert!(matches_ready_to_launch(&unknown, false));
        assert!(!matches_ready_to_launch(&unknown, true));
        assert!(matches_ready_to_launch(&grammar_bot(), true));
        assert!(!matches_ready_to_launch(
            &grammar_bot().with_ready_to_launch(false),
            true
        ));
    }

    #[test]
    fn matches_all_is_a_conjunction() {
        let listing = grammar_bot();
        let criteria = FilterCriteria::default()
            .with_search("bot")
            .with_category("writing")
            .with_price_range(PriceRange::from_major(0, 10))
            .with_min_rating(4.0)
            .with_integration(IntegrationFlag::Api)
            .with_ready_to_launch_only(true);
        assert!(matches_all(&listing, &criteria));
        assert!(!matches_all(&listing, &criteria.clone().with_min_rating(4.8)));
        assert!(!matches_all(&listing, &criteria.with_search("zzz")));
    }
}
