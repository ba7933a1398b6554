//! Query engine: filter with every predicate, then stable-sort.

use std::sync::Arc;

use crate::comparator::SortMode;
use crate::config::CatalogConfig;
use crate::criteria::FilterCriteria;
use crate::listing::Listing;
use crate::predicate::{matches_normalized_search, matches_rest};

/// Apply `criteria` to `listings` and order the survivors by `sort`.
///
/// - Pure: borrows the input, never mutates it, no IO.
/// - A listing is kept only if every predicate accepts it.
/// - The sort is stable, so equal keys keep their input order.
///
/// Accepts any iterator of borrowed listings so an earlier result can be
/// queried again without cloning.
pub fn query<'a, I>(listings: I, criteria: &FilterCriteria, sort: SortMode) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let term = criteria.normalized_search();

    let mut matched: Vec<&'a Listing> = listings
        .into_iter()
        .filter(|listing| matches_normalized_search(listing, &term) && matches_rest(listing, criteria))
        .collect();

    let compare = sort.comparator();
    matched.sort_by(|a, b| compare(a, b));

    matched
}

/// Memoized query state for one catalog view.
///
/// Holds the three inputs (listings, criteria, sort mode) and recomputes only
/// after one of them actually changes. Until then [`CatalogQuery::results`]
/// hands back the same `Arc`, so callers can compare results by pointer.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    listings: Arc<[Listing]>,
    criteria: FilterCriteria,
    sort: SortMode,
    cached: Option<Arc<[Listing]>>,
}

impl CatalogQuery {
    pub fn new(listings: Vec<Listing>, config: &CatalogConfig) -> Self {
        Self {
            listings: Arc::from(listings),
            criteria: FilterCriteria::default(),
            sort: config.default_sort,
            cached: None,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    /// True when the next [`CatalogQuery::results`] call will recompute.
    pub fn is_stale(&self) -> bool {
        self.cached.is_none()
    }

    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        if *self.listings != *listings {
            self.listings = Arc::from(listings);
            self.cached = None;
        }
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.cached = None;
        }
    }

    /// Edit the criteria in place (e.g. a single sidebar toggle).
    pub fn update_criteria<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        let mut next = self.criteria.clone();
        edit(&mut next);
        self.set_criteria(next);
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        if self.sort != sort {
            self.sort = sort;
            self.cached = None;
        }
    }

    pub fn results(&mut self) -> Arc<[Listing]> {
        if let Some(cached) = &self.cached {
            return Arc::clone(cached);
        }

        let fresh: Vec<Listing> = query(self.listings.iter(), &self.criteria, self.sort)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            total = self.listings.len(),
            matched = fresh.len(),
            sort = %self.sort,
            "catalog query recomputed"
        );

        let fresh: Arc<[Listing]> = Arc::from(fresh);
        self.cached = Some(Arc::clone(&fresh));
        fresh
    }
}
