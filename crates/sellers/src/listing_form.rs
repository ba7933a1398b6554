//! "Add listing" form: published immediately once submitted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agentmart_catalog::Integration;
use agentmart_core::{DomainError, Money};
use agentmart_infra::NewListing;

/// Category suggestions offered by the form's picker. Any non-empty label is
/// accepted; the catalog derives its category set from what is stored.
pub const SUGGESTED_CATEGORIES: [&str; 8] = [
    "content",
    "analytics",
    "marketing",
    "support",
    "productivity",
    "automation",
    "finance",
    "development",
];

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingForm {
    pub name: String,
    pub description: String,
    /// Decimal major units, e.g. `"29.99"`.
    pub price: String,
    pub currency: String,
    pub category: String,
    pub vendor: String,
    pub demo_url: String,
    /// Comma-separated tags, e.g. `"API, Webhook"`.
    pub integration: String,
    pub kind: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            currency: "USD".to_string(),
            category: String::new(),
            vendor: String::new(),
            demo_url: String::new(),
            integration: String::new(),
            kind: "agent".to_string(),
        }
    }
}

impl ListingForm {
    /// Check required fields and convert to a store row.
    ///
    /// Name, description, price and category are required. Price is converted
    /// from major to minor units with rounding.
    pub fn validate(&self) -> Result<NewListing, DomainError> {
        let name = required(&self.name)?;
        let description = required(&self.description)?;
        let category = required(&self.category)?;
        if self.price.trim().is_empty() {
            return Err(missing_fields());
        }
        let price = Money::parse_major(&self.price)?;

        Ok(NewListing {
            name,
            description,
            price,
            currency: or_default(&self.currency, "USD"),
            category,
            vendor: optional(&self.vendor),
            demo_url: optional(&self.demo_url),
            integrations: parse_integrations(&self.integration),
            kind: or_default(&self.kind, "agent"),
            has_free_trial: false,
            is_ready_to_launch: false,
        })
    }
}

pub(crate) fn missing_fields() -> DomainError {
    DomainError::validation("please fill in all required fields")
}

pub(crate) fn required(value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(missing_fields())
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    optional(value).unwrap_or_else(|| default.to_string())
}

fn parse_integrations(raw: &str) -> BTreeSet<Integration> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(Integration::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ListingForm {
        ListingForm {
            name: " Content Writer AI ".to_string(),
            description: "Writes posts".to_string(),
            price: "29.99".to_string(),
            category: "content".to_string(),
            integration: "API, webhook ,, Teams".to_string(),
            ..ListingForm::default()
        }
    }

    #[test]
    fn valid_form_converts_price_to_minor_units() {
        let row = filled().validate().unwrap();
        assert_eq!(row.name, "Content Writer AI");
        assert_eq!(row.price, Money::from_minor(2999));
        assert_eq!(row.currency, "USD");
        assert_eq!(row.kind, "agent");
        assert_eq!(row.vendor, None);
        assert_eq!(
            row.integrations,
            BTreeSet::from([
                Integration::Api,
                Integration::Webhooks,
                Integration::Other("Teams".to_string()),
            ])
        );
    }

    #[test]
    fn each_required_field_is_enforced() {
        let blanks: [fn(&mut ListingForm); 4] = [
            |f| f.name.clear(),
            |f| f.description = "   ".to_string(),
            |f| f.price.clear(),
            |f| f.category.clear(),
        ];
        for blank in blanks {
            let mut form = filled();
            blank(&mut form);
            assert!(matches!(form.validate(), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let form = ListingForm {
            price: "twenty".to_string(),
            ..filled()
        };
        assert!(matches!(form.validate(), Err(DomainError::Validation(msg)) if msg.contains("not a number")));
    }

    #[test]
    fn optional_fields_are_trimmed() {
        let form = ListingForm {
            vendor: " Acme ".to_string(),
            demo_url: "https://demo.example.com".to_string(),
            currency: " ".to_string(),
            ..filled()
        };
        let row = form.validate().unwrap();
        assert_eq!(row.vendor.as_deref(), Some("Acme"));
        assert_eq!(row.demo_url.as_deref(), Some("https://demo.example.com"));
        assert_eq!(row.currency, "USD");
    }
}
