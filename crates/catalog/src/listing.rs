use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agentmart_core::{Entity, ListingId, Money, UserId};

/// Capability tag advertised by a listing.
///
/// Stored on the backend as display strings (`"API"`, `"Webhooks"`, ...).
/// Unknown tags are preserved verbatim in [`Integration::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Integration {
    Api,
    Webhooks,
    Zapier,
    Slack,
    Discord,
    Email,
    Sms,
    Other(String),
}

impl Integration {
    /// Tags offered by the seller onboarding form, in display order.
    pub const SELECTABLE: [Integration; 7] = [
        Integration::Api,
        Integration::Webhooks,
        Integration::Zapier,
        Integration::Slack,
        Integration::Discord,
        Integration::Email,
        Integration::Sms,
    ];

    pub fn label(&self) -> &str {
        match self {
            Integration::Api => "API",
            Integration::Webhooks => "Webhooks",
            Integration::Zapier => "Zapier",
            Integration::Slack => "Slack",
            Integration::Discord => "Discord",
            Integration::Email => "Email",
            Integration::Sms => "SMS",
            Integration::Other(tag) => tag,
        }
    }
}

impl From<&str> for Integration {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "api" => Integration::Api,
            "webhook" | "webhooks" => Integration::Webhooks,
            "zapier" => Integration::Zapier,
            "slack" => Integration::Slack,
            "discord" => Integration::Discord,
            "email" => Integration::Email,
            "sms" => Integration::Sms,
            _ => Integration::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for Integration {
    fn from(value: String) -> Self {
        Integration::from(value.as_str())
    }
}

impl From<Integration> for String {
    fn from(value: Integration) -> Self {
        match value {
            Integration::Other(tag) => tag,
            known => known.label().to_string(),
        }
    }
}

impl core::fmt::Display for Integration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry: a sellable AI agent.
///
/// Mirrors the backend row shape; nearly every field may be missing. The query
/// engine only ever reads listings, so the fields are public like the other
/// read models in this workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Minor currency units; `None` or zero is free.
    pub price: Option<Money>,
    pub currency: Option<String>,
    pub category: Option<String>,
    /// Backend listing type, e.g. `"agent"`.
    pub kind: Option<String>,
    /// 0 to 5.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    #[serde(default)]
    pub integrations: BTreeSet<Integration>,
    pub is_ready_to_launch: Option<bool>,
    pub has_free_trial: Option<bool>,
    pub views: Option<u64>,
    pub purchases: Option<u64>,
    /// Seller account that published the listing.
    pub owner: Option<UserId>,
    pub vendor: Option<String>,
    pub demo_url: Option<String>,
    /// Opening line of the demo chat, after the greeting.
    pub demo_message: Option<String>,
    /// Canned reply the demo chat answers every message with.
    pub sample_response: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    pub fn new(id: ListingId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_integrations<I>(mut self, integrations: I) -> Self
    where
        I: IntoIterator<Item = Integration>,
    {
        self.integrations = integrations.into_iter().collect();
        self
    }

    pub fn with_ready_to_launch(mut self, ready: bool) -> Self {
        self.is_ready_to_launch = Some(ready);
        self
    }

    pub fn with_purchases(mut self, purchases: u64) -> Self {
        self.purchases = Some(purchases);
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_demo_script(
        mut self,
        demo_message: impl Into<String>,
        sample_response: impl Into<String>,
    ) -> Self {
        self.demo_message = Some(demo_message.into());
        self.sample_response = Some(sample_response.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Price with the "absent means free" default applied.
    pub fn effective_price(&self) -> Money {
        self.price.unwrap_or(Money::ZERO)
    }

    pub fn is_free(&self) -> bool {
        self.effective_price().is_free()
    }

    /// Absent flag counts as not ready.
    pub fn ready_to_launch(&self) -> bool {
        self.is_ready_to_launch.unwrap_or(false)
    }

    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or("Untitled")
    }

    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or("No description available")
    }

    pub fn display_category(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or("General")
    }

    pub fn display_price(&self) -> String {
        self.effective_price().display_whole()
    }
}

impl Entity for Listing {
    type Id = ListingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
