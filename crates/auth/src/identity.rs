//! Identity provider seam.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;

use agentmart_core::UserId;

use crate::profile::Profile;
use crate::roles::Role;
use crate::session::{Session, SessionToken};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password must be at least 6 characters")]
    WeakPassword,

    #[error("an account already exists for {0}")]
    AccountExists(String),

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("session is not signed in")]
    UnknownSession,

    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Hosted identity provider operations used by the marketplace.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;

    /// Role attached to the session's account, if any.
    async fn current_role(&self, session: &Session) -> Result<Option<Role>, AuthError>;

    /// Profile row of the session's account.
    async fn fetch_profile(&self, session: &Session) -> Result<Profile, AuthError>;

    /// Change the display name and return the updated profile.
    async fn update_username(&self, session: &Session, username: &str) -> Result<Profile, AuthError>;

    /// Re-read the role. A failed lookup leaves the session without a role
    /// rather than failing the caller.
    async fn refresh_role(&self, session: Session) -> Session {
        match self.current_role(&session).await {
            Ok(role) => session.with_role(role),
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, error = %e, "role lookup failed");
                session.with_role(None)
            }
        }
    }
}

fn validate_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(AuthError::InvalidEmail(email))
    }
}

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    password: String,
    role: Role,
    username: String,
    updated_at: DateTime<Utc>,
}

impl Account {
    fn profile(&self) -> Profile {
        Profile {
            user_id: self.user_id,
            username: self.username.clone(),
            role: Some(self.role.clone()),
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    sessions: HashSet<SessionToken>,
}

/// In-process identity provider for tests and the demo binary.
///
/// Stores passwords verbatim; it is a test double, not an auth service.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    inner: RwLock<Inner>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change an account's role (what an admin would do in the backend console).
    pub fn set_role(&self, email: &str, role: Role) -> Result<(), AuthError> {
        let email = validate_email(email)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        let account = inner
            .accounts
            .get_mut(&email)
            .ok_or(AuthError::InvalidCredentials)?;
        account.role = role;
        Ok(())
    }

    fn open_session(inner: &mut Inner, email: String, account: &Account) -> Session {
        let token = SessionToken::new();
        inner.sessions.insert(token);
        Session {
            token,
            user_id: account.user_id,
            email,
            role: Some(account.role.clone()),
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        if inner.accounts.contains_key(&email) {
            return Err(AuthError::AccountExists(email));
        }

        let username = email.split('@').next().unwrap_or_default().to_string();
        let account = Account {
            user_id: UserId::new(),
            password: password.to_string(),
            role: Role::BUYER,
            username,
            updated_at: Utc::now(),
        };
        inner.accounts.insert(email.clone(), account.clone());
        tracing::info!(user_id = %account.user_id, "account created");

        Ok(Self::open_session(&mut inner, email, &account))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = validate_email(email).map_err(|_| AuthError::InvalidCredentials)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;

        let account = match inner.accounts.get(&email) {
            Some(account) if account.password == password => account.clone(),
            _ => {
                tracing::info!("sign in rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        tracing::info!(user_id = %account.user_id, "signed in");
        Ok(Self::open_session(&mut inner, email, &account))
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        if inner.sessions.remove(&session.token) {
            tracing::info!(user_id = %session.user_id, "signed out");
        }
        Ok(())
    }

    async fn current_role(&self, session: &Session) -> Result<Option<Role>, AuthError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        if !inner.sessions.contains(&session.token) {
            return Err(AuthError::UnknownSession);
        }
        Ok(inner
            .accounts
            .get(&session.email)
            .map(|account| account.role.clone()))
    }

    async fn fetch_profile(&self, session: &Session) -> Result<Profile, AuthError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        if !inner.sessions.contains(&session.token) {
            return Err(AuthError::UnknownSession);
        }
        inner
            .accounts
            .get(&session.email)
            .map(Account::profile)
            .ok_or(AuthError::UnknownSession)
    }

    async fn update_username(&self, session: &Session, username: &str) -> Result<Profile, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| AuthError::Provider("lock poisoned".to_string()))?;
        if !inner.sessions.contains(&session.token) {
            return Err(AuthError::UnknownSession);
        }
        let account = inner
            .accounts
            .get_mut(&session.email)
            .ok_or(AuthError::UnknownSession)?;
        account.username = username.to_string();
        account.updated_at = Utc::now();

        tracing::info!(user_id = %session.user_id, "profile updated");
        Ok(account.profile())
    }
}
