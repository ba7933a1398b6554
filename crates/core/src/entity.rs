//! Entity trait: identity that survives field changes.

/// Something with a stable identifier (a listing, an account).
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
