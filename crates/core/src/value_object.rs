//! Value object marker: compared by value, no identity.

/// Marker trait for immutable values such as [`crate::Money`] or a price range.
///
/// Two value objects holding the same fields are interchangeable; "changing"
/// one means building a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
