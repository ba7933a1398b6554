use std::sync::Arc;

use agentmart_analytics::SellerStats;
use agentmart_catalog::{CatalogConfig, DemoChat, FilterCriteria, SortMode};
use agentmart_infra::{CatalogView, InMemoryListingStore, LoadState};

const SAMPLE_LISTINGS: &str = include_str!("../data/sample_listings.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agentmart_observability::init();

    let config = CatalogConfig::from_env();
    let store = Arc::new(InMemoryListingStore::from_json_rows(SAMPLE_LISTINGS)?);

    let mut view = CatalogView::load(store, &config).await;
    if view.state() == LoadState::Failed {
        anyhow::bail!("catalog failed to load");
    }

    let mut criteria = FilterCriteria::default();
    if let Ok(term) = std::env::var("AGENTMART_SEARCH") {
        criteria = criteria.with_search(term);
    }
    if let Ok(category) = std::env::var("AGENTMART_CATEGORY") {
        criteria = criteria.with_category(category);
    }
    view.catalog().set_criteria(criteria);

    if let Ok(selector) = std::env::var("AGENTMART_SORT") {
        let sort = SortMode::from_selector(&selector).unwrap_or_else(|| {
            tracing::warn!(selector = %selector, "unknown sort selector; using configured default");
            config.default_sort
        });
        view.catalog().set_sort_mode(sort);
    }

    for (category, count) in view.categories() {
        tracing::info!(category = %category, count, "category");
    }

    let results = view.results();
    tracing::info!(
        matched = results.len(),
        sort = %view.catalog().sort_mode(),
        "query finished"
    );
    for listing in results.iter() {
        tracing::info!(
            id = %listing.id,
            name = listing.display_name(),
            category = listing.display_category(),
            price = %listing.display_price(),
            rating = listing.rating.unwrap_or(0.0),
            "listing"
        );
    }

    if let (Some(first), Ok(message)) = (results.first(), std::env::var("AGENTMART_CHAT")) {
        let mut chat = DemoChat::for_listing(first);
        chat.send(&message);
        for line in chat.transcript() {
            tracing::info!(speaker = ?line.speaker, text = %line.text, "demo chat");
        }
    }

    let stats = SellerStats::from_listings(results.iter());
    tracing::info!(
        listings = stats.total_listings,
        views = stats.total_views,
        purchases = stats.total_purchases,
        average_rating = stats.average_rating.unwrap_or(0.0),
        gross_earnings = %stats.gross_earnings.display_dollars(),
        "totals for matched listings"
    );

    Ok(())
}
