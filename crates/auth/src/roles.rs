use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role name as returned by the identity provider's role lookup.
///
/// Kept as an opaque string so unknown roles from the backend survive a round
/// trip; the known ones are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const BUYER: Role = Role(Cow::Borrowed("buyer"));
    pub const SELLER: Role = Role(Cow::Borrowed("seller"));
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sellers and admins may publish listings.
    pub fn can_publish_listings(&self) -> bool {
        *self == Role::SELLER || *self == Role::ADMIN
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sellers_and_admins_publish() {
        assert!(Role::SELLER.can_publish_listings());
        assert!(Role::ADMIN.can_publish_listings());
        assert!(!Role::BUYER.can_publish_listings());
        assert!(!Role::new("developer").can_publish_listings());
        assert!(Role::new(String::from("seller")).can_publish_listings());
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Role::ADMIN).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"seller\"").unwrap();
        assert_eq!(role, Role::SELLER);
    }
}
