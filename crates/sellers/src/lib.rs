//! Seller-side flows: listing forms, the description generator seam, and
//! submission to the listing store.
//!
//! Forms are plain data with `validate()`; nothing here renders anything.

pub mod description;
pub mod listing_form;
pub mod onboarding;
pub mod submission;

pub use description::{DescriptionGenerator, GeneratorError, TemplateDescriptionGenerator};
pub use listing_form::{ListingForm, SUGGESTED_CATEGORIES};
pub use onboarding::{OnboardingForm, ONBOARDING_CATEGORIES, Thumbnail, ThumbnailError};
pub use submission::{ListingSubmissions, SubmissionError};
