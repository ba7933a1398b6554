//! Submitting seller forms to the listing store.

use thiserror::Error;

use agentmart_auth::{AuthzError, Session, authorize_listing_creation};
use agentmart_catalog::Listing;
use agentmart_core::DomainError;
use agentmart_infra::{ListingStatus, ListingStore, Notification, StoreError};

use crate::listing_form::ListingForm;
use crate::onboarding::OnboardingForm;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Unauthorized(#[from] AuthzError),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// The toast shown for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            SubmissionError::Unauthorized(AuthzError::NotSignedIn) => {
                Notification::error("You must be logged in to add a product.")
            }
            SubmissionError::Unauthorized(AuthzError::Forbidden(_)) => {
                Notification::access_denied("You do not have permission to add products.")
            }
            SubmissionError::Invalid(_) => Notification::error("Please fill in all required fields."),
            SubmissionError::Store(_) => Notification::error("Failed to add product. Please try again."),
        }
    }
}

/// Seller write path. Authorization runs before validation, validation before
/// any store call.
#[derive(Debug, Clone)]
pub struct ListingSubmissions<S> {
    store: S,
}

impl<S> ListingSubmissions<S>
where
    S: ListingStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// "Add listing" form: the row goes live immediately.
    pub async fn submit_listing(
        &self,
        session: Option<&Session>,
        form: &ListingForm,
    ) -> Result<Listing, SubmissionError> {
        let session = authorize_listing_creation(session)?;
        let row = form.validate()?;

        let listing = self
            .store
            .insert_listing(row, session.user_id, ListingStatus::Active)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "error adding product"))?;

        tracing::info!(listing_id = %listing.id, owner = %session.user_id, "listing published");
        Ok(listing)
    }

    /// Onboarding form: the row waits for review. The form is reset only after
    /// the store accepts it.
    pub async fn submit_onboarding(
        &self,
        session: Option<&Session>,
        form: &mut OnboardingForm,
    ) -> Result<Listing, SubmissionError> {
        let session = authorize_listing_creation(session)?;
        let row = form.validate()?;

        let listing = self
            .store
            .insert_listing(row, session.user_id, ListingStatus::PendingReview)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "error submitting agent"))?;

        form.reset();
        tracing::info!(listing_id = %listing.id, owner = %session.user_id, "listing submitted for review");
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use agentmart_auth::{Role, SessionToken};
    use agentmart_core::{Money, UserId};
    use agentmart_infra::{InMemoryListingStore, NotificationVariant};

    fn session(role: Role) -> Session {
        Session {
            token: SessionToken::new(),
            user_id: UserId::new(),
            email: "seller@example.com".to_string(),
            role: Some(role),
        }
    }

    fn listing_form() -> ListingForm {
        ListingForm {
            name: "GrammarBot".to_string(),
            description: "Fixes prose".to_string(),
            price: "12.50".to_string(),
            category: "writing".to_string(),
            ..ListingForm::default()
        }
    }

    fn onboarding_form() -> OnboardingForm {
        OnboardingForm {
            name: "SocialBot".to_string(),
            category: "Social Media".to_string(),
            price: "20".to_string(),
            description: "Schedules posts".to_string(),
            is_ready_to_launch: true,
            ..OnboardingForm::default()
        }
    }

    #[tokio::test]
    async fn seller_listing_goes_live() {
        let store = Arc::new(InMemoryListingStore::new());
        let submissions = ListingSubmissions::new(Arc::clone(&store));
        let seller = session(Role::SELLER);

        let listing = submissions
            .submit_listing(Some(&seller), &listing_form())
            .await
            .unwrap();
        assert_eq!(listing.owner, Some(seller.user_id));
        assert_eq!(listing.effective_price(), Money::from_minor(1250));
        assert_eq!(store.status_of(listing.id), Some(ListingStatus::Active));
        assert_eq!(store.fetch_active_listings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn onboarding_waits_for_review_and_resets_form() {
        let store = Arc::new(InMemoryListingStore::new());
        let submissions = ListingSubmissions::new(Arc::clone(&store));
        let mut form = onboarding_form();

        let listing = submissions
            .submit_onboarding(Some(&session(Role::ADMIN)), &mut form)
            .await
            .unwrap();
        assert_eq!(store.status_of(listing.id), Some(ListingStatus::PendingReview));
        assert!(store.fetch_active_listings().await.unwrap().is_empty());
        assert_eq!(form, OnboardingForm::default());
    }

    #[tokio::test]
    async fn refusals_never_touch_the_store() {
        let store = Arc::new(InMemoryListingStore::new());
        let submissions = ListingSubmissions::new(Arc::clone(&store));

        let err = submissions.submit_listing(None, &listing_form()).await.unwrap_err();
        assert_eq!(err, SubmissionError::Unauthorized(AuthzError::NotSignedIn));
        assert_eq!(err.notification().description, "You must be logged in to add a product.");

        let err = submissions
            .submit_listing(Some(&session(Role::BUYER)), &listing_form())
            .await
            .unwrap_err();
        let note = err.notification();
        assert_eq!(note.title, "Access Denied");
        assert_eq!(note.variant, NotificationVariant::Destructive);

        let blank = ListingForm {
            name: String::new(),
            ..listing_form()
        };
        let err = submissions
            .submit_listing(Some(&session(Role::SELLER)), &blank)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Invalid(_)));

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn store_failure_keeps_onboarding_form() {
        let store = Arc::new(InMemoryListingStore::new());
        store.set_offline(true);
        let submissions = ListingSubmissions::new(Arc::clone(&store));
        let mut form = onboarding_form();

        let err = submissions
            .submit_onboarding(Some(&session(Role::SELLER)), &mut form)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Store(_)));
        assert_eq!(
            err.notification().description,
            "Failed to add product. Please try again."
        );
        assert_eq!(form, onboarding_form());
    }
}
