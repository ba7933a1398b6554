//! Account profile shown on the profile page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agentmart_core::UserId;

use crate::identity::{AuthError, IdentityProvider};
use crate::roles::Role;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub username: String,
    pub role: Option<Role>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn role_label(&self) -> &str {
        self.role.as_ref().map_or("unassigned", Role::as_str)
    }
}

/// Save a new username, then re-read the profile and the session's role.
///
/// Returns the stored profile and the session with its role refreshed.
pub async fn save_profile<P>(
    provider: &P,
    session: Session,
    username: &str,
) -> Result<(Profile, Session), AuthError>
where
    P: IdentityProvider + ?Sized,
{
    provider.update_username(&session, username).await?;
    let profile = provider.fetch_profile(&session).await?;
    let session = provider.refresh_role(session).await;
    Ok((profile, session))
}
