//! Derived facets (the category set is not predefined).

use std::collections::BTreeMap;

use crate::listing::Listing;

/// Categories in use with how many listings carry each, ordered by label.
/// Listings without a category are not counted.
pub fn category_counts<'a, I>(listings: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut counts = BTreeMap::new();
    for category in listings
        .into_iter()
        .filter_map(|listing| listing.category.as_deref())
        .filter(|category| !category.trim().is_empty())
    {
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }
    counts
}
