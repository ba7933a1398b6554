use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agentmart_core::UserId;

use crate::roles::Role;

/// Opaque handle the identity provider uses to recognize a signed-in session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

/// The acting user's session.
///
/// There is no ambient "current user": components that care receive an
/// `Option<&Session>` explicitly (`None` when signed out).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub email: String,
    /// `None` until the role lookup completes (or when it failed).
    pub role: Option<Role>,
}

impl Session {
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn can_add_listings(&self) -> bool {
        self.role.as_ref().is_some_and(Role::can_publish_listings)
    }
}
