//! Admin credential pair.

use serde::{Deserialize, Serialize};

/// A username/password pair gating admin access.
///
/// This is the candidate a user submits through the login challenge, and the
/// shape of the pair held in the per-browser credential store. There is a
/// single global expected pair (held in configuration), not a record set.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The submitted username.
    pub username: String,
    /// The submitted password.
    pub password: String,
}

impl Credential {
    /// Create a credential pair.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("admin".to_string(), "hunter2".to_string());
        let debug_output = format!("{credential:?}");

        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Credential::new("admin".to_string(), "1234".to_string());
        let b = Credential::new("admin".to_string(), "1234".to_string());
        let c = Credential::new("admin".to_string(), "0000".to_string());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
