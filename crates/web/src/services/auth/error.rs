//! Session gate error types.

use thiserror::Error;

use super::Notification;

/// Notification message emitted on a failed challenge submission.
pub const INVALID_CREDENTIAL_MESSAGE: &str = "Invalid credentials or insufficient access";

/// Errors that can occur during session gate operations.
///
/// The single variant is always recovered locally: it is surfaced as a
/// transient notification and the challenge form stays open.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The submitted pair did not match the expected pair.
    #[error("invalid credentials or insufficient access")]
    InvalidCredential,
}

impl AuthError {
    /// The user-facing notification for this error.
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::InvalidCredential => Notification::error(INVALID_CREDENTIAL_MESSAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::services::auth::NotificationKind;

    #[test]
    fn test_invalid_credential_notification() {
        let notification = AuthError::InvalidCredential.notification();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, INVALID_CREDENTIAL_MESSAGE);
    }
}
