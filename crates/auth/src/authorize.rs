use thiserror::Error;

use crate::roles::Role;
use crate::session::Session;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("you must be logged in to add a product")]
    NotSignedIn,

    #[error("role '{0}' does not have permission to add products")]
    Forbidden(String),
}

/// The only identity-derived fact the catalog consumes.
pub fn can_add_listings(session: Option<&Session>) -> bool {
    session.is_some_and(Session::can_add_listings)
}

/// Gate for listing creation: signed in, with a seller or admin role.
///
/// - No IO
/// - A session whose role has not been resolved yet is refused
pub fn authorize_listing_creation(session: Option<&Session>) -> Result<&Session, AuthzError> {
    let session = session.ok_or(AuthzError::NotSignedIn)?;
    match &session.role {
        Some(role) if role.can_publish_listings() => Ok(session),
        Some(role) => Err(AuthzError::Forbidden(role.to_string())),
        None => Err(AuthzError::Forbidden("none".to_string())),
    }
}
