//! `agentmart-core`: shared building blocks for the marketplace crates.
//!
//! Pure types only: identifiers, money, and the domain error model. Nothing in
//! here performs IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ListingId, UserId};
pub use money::Money;
pub use value_object::ValueObject;
