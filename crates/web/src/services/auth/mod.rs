//! Admin session gate.
//!
//! Decides whether the current browser may enter the admin panel, performs
//! the login challenge, and revokes access on logout. Authorization is
//! re-derived from the persisted credential store on every check rather than
//! cached in memory, so a pair stored in a previous visit authorizes the
//! next one without a fresh challenge.

mod error;
mod flow;
mod store;

pub use error::AuthError;
pub use flow::{SessionFlow, SessionState};
pub use store::{MemoryCredentialStore, SessionCredentialStore};

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use zorglog_core::Credential;

use crate::config::ExpectedCredential;

/// Storage keys used in the credential store.
pub mod keys {
    /// Key for the stored admin username.
    pub const USERNAME: &str = "user";

    /// Key for the stored admin password.
    pub const PASSWORD: &str = "password";
}

/// Per-browser key-value storage for the admin credential pair.
///
/// The store survives page reloads within the same browser; implementations
/// treat a read failure as an absent value.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Read a stored value.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value.
    async fn set(&self, key: &str, value: &str);

    /// Remove a stored value.
    async fn remove(&self, key: &str);
}

/// Outcome of an admin-access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Already authorized; the caller navigates straight to the admin route.
    Allow,
    /// Not authorized; the caller must present the login challenge.
    Challenge,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A transient user-facing notification, rendered on the next page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity, used for styling.
    pub kind: NotificationKind,
    /// Message shown to the user.
    pub message: String,
}

impl Notification {
    /// A success notification.
    #[must_use]
    pub fn success(message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    /// An error notification.
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_string(),
        }
    }
}

/// Notification message emitted on logout.
pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

/// Admin session gate.
///
/// Compares the credential store's contents against the configured expected
/// pair. Holds no state of its own; construct one per request.
pub struct SessionGate<S> {
    expected: ExpectedCredential,
    store: S,
}

impl<S: CredentialStore> SessionGate<S> {
    /// Create a gate over a credential store.
    #[must_use]
    pub const fn new(expected: ExpectedCredential, store: S) -> Self {
        Self { expected, store }
    }

    /// Whether the stored pair matches the expected pair exactly.
    ///
    /// Returns false when either key is absent. No side effects.
    pub async fn is_authorized(&self) -> bool {
        let username = self.store.get(keys::USERNAME).await;
        let password = self.store.get(keys::PASSWORD).await;

        matches!(
            (username, password),
            (Some(username), Some(password)) if self.matches(&username, &password)
        )
    }

    /// Decide how an admin-access request proceeds.
    ///
    /// `Allow` when a previously stored pair already authorizes this browser,
    /// `Challenge` otherwise.
    pub async fn request_admin_access(&self) -> AccessDecision {
        if self.is_authorized().await {
            AccessDecision::Allow
        } else {
            AccessDecision::Challenge
        }
    }

    /// Submit a candidate pair from the login challenge.
    ///
    /// On a match the pair is persisted into the store. On a mismatch the
    /// store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] when the candidate does not
    /// match the expected pair.
    pub async fn submit_credential(&self, candidate: &Credential) -> Result<(), AuthError> {
        if !self.matches(&candidate.username, &candidate.password) {
            return Err(AuthError::InvalidCredential);
        }

        self.store.set(keys::USERNAME, &candidate.username).await;
        self.store.set(keys::PASSWORD, &candidate.password).await;
        Ok(())
    }

    /// Log out: revoke admin access by clearing the stored pair.
    ///
    /// Returns the success notification for the caller to surface; the
    /// caller then navigates to the root route.
    pub async fn log_out(&self) -> Notification {
        self.store.remove(keys::USERNAME).await;
        self.store.remove(keys::PASSWORD).await;
        Notification::success(LOGGED_OUT_MESSAGE)
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        username == self.expected.username && password == self.expected.password.expose_secret()
    }
}
