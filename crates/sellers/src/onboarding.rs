//! Seller onboarding form: submissions go to review before publication.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agentmart_catalog::Integration;
use agentmart_core::{DomainError, Money};
use agentmart_infra::NewListing;

use crate::description::{DescriptionGenerator, GeneratorError};
use crate::listing_form::{missing_fields, required};

pub const ONBOARDING_CATEGORIES: [&str; 8] = [
    "Content Generation",
    "Analytics",
    "Marketing",
    "DevOps",
    "Customer Service",
    "Productivity",
    "Writing",
    "Social Media",
];

const MAX_THUMBNAIL_BYTES: u64 = 2 * 1024 * 1024;
const THUMBNAIL_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/svg+xml"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    #[error("file size must be less than 2MB")]
    TooLarge,

    #[error("only PNG, JPG, and SVG files are allowed")]
    UnsupportedType(String),
}

/// Metadata of a picked thumbnail file. Upload transport is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl Thumbnail {
    pub fn validate(&self) -> Result<(), ThumbnailError> {
        if self.size_bytes > MAX_THUMBNAIL_BYTES {
            return Err(ThumbnailError::TooLarge);
        }
        if !THUMBNAIL_TYPES.contains(&self.mime_type.as_str()) {
            return Err(ThumbnailError::UnsupportedType(self.mime_type.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub name: String,
    pub category: String,
    /// Monthly price, decimal major units.
    pub price: String,
    pub description: String,
    pub thumbnail: Option<Thumbnail>,
    pub integrations: BTreeSet<Integration>,
    pub has_free_trial: bool,
    pub is_ready_to_launch: bool,
}

impl OnboardingForm {
    pub fn toggle_integration(&mut self, integration: Integration) {
        if !self.integrations.remove(&integration) {
            self.integrations.insert(integration);
        }
    }

    /// Attach a thumbnail; an invalid file leaves the previous one in place.
    pub fn attach_thumbnail(&mut self, thumbnail: Thumbnail) -> Result<(), ThumbnailError> {
        thumbnail.validate()?;
        self.thumbnail = Some(thumbnail);
        Ok(())
    }

    /// Fill the description from the generator. Requires name and category.
    pub async fn generate_description<G>(&mut self, generator: &G) -> Result<(), GeneratorError>
    where
        G: DescriptionGenerator + ?Sized,
    {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(GeneratorError::MissingInput);
        }
        self.description = generator.describe(&self.name, &self.category).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<NewListing, DomainError> {
        let name = required(&self.name)?;
        let category = required(&self.category)?;
        let description = required(&self.description)?;
        if self.price.trim().is_empty() {
            return Err(missing_fields());
        }
        let price = Money::parse_major(&self.price)?;

        Ok(NewListing {
            name,
            description,
            price,
            currency: "USD".to_string(),
            category,
            vendor: None,
            demo_url: None,
            integrations: self.integrations.clone(),
            kind: "agent".to_string(),
            has_free_trial: self.has_free_trial,
            is_ready_to_launch: self.is_ready_to_launch,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
