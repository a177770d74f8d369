//! Credential store implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use tower_sessions::Session;

use super::CredentialStore;

/// Credential store backed by the browser's tower-sessions session.
///
/// The session cookie survives page reloads within the same browser, which
/// is the persistence contract the gate relies on. Read failures are treated
/// as absent values; write failures are logged and dropped.
#[derive(Clone)]
pub struct SessionCredentialStore {
    session: Session,
}

impl SessionCredentialStore {
    /// Wrap a request's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CredentialStore for SessionCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.session.get::<String>(key).await.ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Err(error) = self.session.insert(key, value.to_string()).await {
            tracing::warn!(%key, %error, "failed to write credential store value");
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(error) = self.session.remove::<String>(key).await {
            tracing::warn!(%key, %error, "failed to remove credential store value");
        }
    }
}

/// In-memory credential store for tests.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::default();

        assert_eq!(store.get("user").await, None);

        store.set("user", "admin").await;
        assert_eq!(store.get("user").await.as_deref(), Some("admin"));

        store.remove("user").await;
        assert_eq!(store.get("user").await, None);
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryCredentialStore::default();

        store.set("user", "admin").await;
        store.set("user", "other").await;

        assert_eq!(store.get("user").await.as_deref(), Some("other"));
    }
}
