//! Per-browser session state machine.
//!
//! Tracks where a browser is in the admin-access flow. Authorization itself
//! is always re-derived from the credential store by the underlying gate;
//! the state only records whether the challenge form is open.

use zorglog_core::Credential;

use super::{AccessDecision, AuthError, CredentialStore, Notification, SessionGate};

/// Where a browser session currently stands in the admin-access flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not authorized, no challenge open.
    #[default]
    Anonymous,
    /// The login challenge is open.
    Challenging,
    /// Authorized for the admin panel.
    Authorized,
}

/// The session gate plus its per-browser state machine.
pub struct SessionFlow<S> {
    gate: SessionGate<S>,
    state: SessionState,
}

impl<S: CredentialStore> SessionFlow<S> {
    /// Start a flow in the `Anonymous` state.
    #[must_use]
    pub const fn new(gate: SessionGate<S>) -> Self {
        Self {
            gate,
            state: SessionState::Anonymous,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The "Administration" action.
    ///
    /// Moves to `Authorized` when a previously stored pair already passes
    /// the gate (no challenge), otherwise opens the challenge.
    pub async fn request_admin_access(&mut self) -> AccessDecision {
        let decision = self.gate.request_admin_access().await;
        self.state = match decision {
            AccessDecision::Allow => SessionState::Authorized,
            AccessDecision::Challenge => SessionState::Challenging,
        };
        decision
    }

    /// Submit a candidate pair from the open challenge.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredential`] on a mismatch; the state
    /// stays `Challenging` so the form remains open.
    pub async fn submit_credential(&mut self, candidate: &Credential) -> Result<(), AuthError> {
        self.gate.submit_credential(candidate).await?;
        self.state = SessionState::Authorized;
        Ok(())
    }

    /// Dismiss the open challenge without submitting.
    pub const fn cancel(&mut self) {
        if matches!(self.state, SessionState::Challenging) {
            self.state = SessionState::Anonymous;
        }
    }

    /// Log out, returning to `Anonymous`.
    pub async fn log_out(&mut self) -> Notification {
        self.state = SessionState::Anonymous;
        self.gate.log_out().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::SecretString;

    use crate::config::ExpectedCredential;
    use crate::services::auth::MemoryCredentialStore;

    fn flow() -> SessionFlow<MemoryCredentialStore> {
        let expected = ExpectedCredential {
            username: "admin".to_string(),
            password: SecretString::from("1234"),
        };
        SessionFlow::new(SessionGate::new(expected, MemoryCredentialStore::default()))
    }

    fn correct() -> Credential {
        Credential::new("admin".to_string(), "1234".to_string())
    }

    #[tokio::test]
    async fn test_access_request_without_stored_pair_opens_challenge() {
        let mut flow = flow();
        assert_eq!(flow.state(), SessionState::Anonymous);

        let decision = flow.request_admin_access().await;

        assert_eq!(decision, AccessDecision::Challenge);
        assert_eq!(flow.state(), SessionState::Challenging);
    }

    #[tokio::test]
    async fn test_successful_submit_authorizes() {
        let mut flow = flow();
        flow.request_admin_access().await;

        flow.submit_credential(&correct()).await.expect("valid pair");

        assert_eq!(flow.state(), SessionState::Authorized);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_challenge_open() {
        let mut flow = flow();
        flow.request_admin_access().await;

        let wrong = Credential::new("admin".to_string(), "0000".to_string());
        let result = flow.submit_credential(&wrong).await;

        assert!(matches!(result, Err(AuthError::InvalidCredential)));
        assert_eq!(flow.state(), SessionState::Challenging);
    }

    #[tokio::test]
    async fn test_cancel_returns_to_anonymous() {
        let mut flow = flow();
        flow.request_admin_access().await;
        assert_eq!(flow.state(), SessionState::Challenging);

        flow.cancel();

        assert_eq!(flow.state(), SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_cancel_does_not_revoke_authorization() {
        let mut flow = flow();
        flow.request_admin_access().await;
        flow.submit_credential(&correct()).await.expect("valid pair");

        flow.cancel();

        assert_eq!(flow.state(), SessionState::Authorized);
    }

    #[tokio::test]
    async fn test_access_request_with_stored_pair_skips_challenge() {
        let mut flow = flow();
        flow.request_admin_access().await;
        flow.submit_credential(&correct()).await.expect("valid pair");
        flow.log_out().await;

        // Re-derivation comes from the store; after logout the pair is gone,
        // so a fresh request challenges again.
        let decision = flow.request_admin_access().await;
        assert_eq!(decision, AccessDecision::Challenge);

        // Store the pair again and the next request passes straight through.
        flow.submit_credential(&correct()).await.expect("valid pair");
        let mut revisit = SessionFlow {
            state: SessionState::Anonymous,
            ..flow
        };
        assert_eq!(revisit.request_admin_access().await, AccessDecision::Allow);
        assert_eq!(revisit.state(), SessionState::Authorized);
    }

    #[tokio::test]
    async fn test_log_out_returns_to_anonymous() {
        let mut flow = flow();
        flow.request_admin_access().await;
        flow.submit_credential(&correct()).await.expect("valid pair");

        let notification = flow.log_out().await;

        assert_eq!(flow.state(), SessionState::Anonymous);
        assert_eq!(notification.message, super::super::LOGGED_OUT_MESSAGE);
    }
}
