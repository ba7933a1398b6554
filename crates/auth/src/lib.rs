//! `agentmart-auth`: identity collaborator boundary.
//!
//! The hosted identity provider owns accounts and sessions. This crate models
//! the slice the marketplace consumes: an explicit [`Session`] value passed to
//! whoever needs it, the role attached to it, and the "may add listings" check.

pub mod authorize;
pub mod identity;
pub mod profile;
pub mod roles;
pub mod session;

pub use authorize::{AuthzError, authorize_listing_creation, can_add_listings};
pub use identity::{AuthError, IdentityProvider, InMemoryIdentityProvider};
pub use profile::{Profile, save_profile};
pub use roles::Role;
pub use session::{Session, SessionToken};
