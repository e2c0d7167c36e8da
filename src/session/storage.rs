//! Session Storage
//!
//! Persisted bearer sessions keyed by name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::bearer::TokenBearer;
use crate::error::{PresenterError, StorageError};
use crate::types::{AuthType, Token};

/// Persisted form of a bearer session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Authentication type the session was created with.
    pub auth_type: AuthType,
    /// Last known token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    /// Whether the token was revoked.
    #[serde(default)]
    pub revoked: bool,
    /// When the session was stored.
    pub stored_at: DateTime<Utc>,
}

impl StoredSession {
    /// Snapshot a live bearer.
    pub fn from_bearer(bearer: &dyn TokenBearer) -> Self {
        Self {
            auth_type: bearer.auth_type(),
            token: bearer.token(),
            revoked: bearer.is_revoked(),
            stored_at: Utc::now(),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, PresenterError> {
        serde_json::to_string(self).map_err(|e| {
            PresenterError::Storage(StorageError::WriteFailed {
                message: e.to_string(),
            })
        })
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, PresenterError> {
        serde_json::from_str(json).map_err(|e| {
            PresenterError::Storage(StorageError::CorruptedData {
                message: e.to_string(),
            })
        })
    }
}

/// Session storage interface.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Store a session for a key.
    async fn store(&self, key: &str, session: StoredSession) -> Result<(), PresenterError>;

    /// Retrieve the session for a key.
    async fn retrieve(&self, key: &str) -> Result<Option<StoredSession>, PresenterError>;

    /// Delete the session for a key.
    async fn delete(&self, key: &str) -> Result<bool, PresenterError>;

    /// Check if a session exists for a key.
    async fn exists(&self, key: &str) -> Result<bool, PresenterError>;

    /// Clear all stored sessions.
    async fn clear(&self) -> Result<(), PresenterError>;
}

/// In-memory session storage implementation.
#[derive(Default)]
pub struct InMemoryTokenStorage {
    sessions: Mutex<HashMap<String, StoredSession>>,
}

impl InMemoryTokenStorage {
    /// Create new in-memory session storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn store(&self, key: &str, session: StoredSession) -> Result<(), PresenterError> {
        self.sessions
            .lock()
            .unwrap()
            .insert(key.to_string(), session);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<StoredSession>, PresenterError> {
        Ok(self.sessions.lock().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<bool, PresenterError> {
        Ok(self.sessions.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, PresenterError> {
        Ok(self.sessions.lock().unwrap().contains_key(key))
    }

    async fn clear(&self) -> Result<(), PresenterError> {
        self.sessions.lock().unwrap().clear();
        Ok(())
    }
}

/// Mock session storage for testing.
#[derive(Default)]
pub struct MockTokenStorage {
    sessions: Mutex<HashMap<String, StoredSession>>,
    store_history: Mutex<Vec<(String, StoredSession)>>,
    retrieve_history: Mutex<Vec<String>>,
    next_error: Mutex<Option<PresenterError>>,
    should_fail: Mutex<bool>,
}

impl MockTokenStorage {
    /// Create new mock session storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set next error to return.
    pub fn set_next_error(&self, error: PresenterError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Set storage to fail all operations.
    pub fn set_should_fail(&self, should_fail: bool) -> &Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    /// Pre-populate a session.
    pub fn add_session(&self, key: &str, session: StoredSession) -> &Self {
        self.sessions
            .lock()
            .unwrap()
            .insert(key.to_string(), session);
        self
    }

    /// Get store history.
    pub fn get_store_history(&self) -> Vec<(String, StoredSession)> {
        self.store_history.lock().unwrap().clone()
    }

    /// Get retrieve history.
    pub fn get_retrieve_history(&self) -> Vec<String> {
        self.retrieve_history.lock().unwrap().clone()
    }

    fn check_error(&self) -> Result<(), PresenterError> {
        if *self.should_fail.lock().unwrap() {
            return Err(PresenterError::Storage(StorageError::ReadFailed {
                message: "Mock storage failure".to_string(),
            }));
        }

        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        Ok(())
    }
}

#[async_trait]
impl TokenStorage for MockTokenStorage {
    async fn store(&self, key: &str, session: StoredSession) -> Result<(), PresenterError> {
        self.check_error()?;

        self.store_history
            .lock()
            .unwrap()
            .push((key.to_string(), session.clone()));
        self.sessions
            .lock()
            .unwrap()
            .insert(key.to_string(), session);
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<StoredSession>, PresenterError> {
        self.check_error()?;

        self.retrieve_history
            .lock()
            .unwrap()
            .push(key.to_string());
        Ok(self.sessions.lock().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<bool, PresenterError> {
        self.check_error()?;
        Ok(self.sessions.lock().unwrap().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool, PresenterError> {
        self.check_error()?;
        Ok(self.sessions.lock().unwrap().contains_key(key))
    }

    async fn clear(&self) -> Result<(), PresenterError> {
        self.check_error()?;
        self.sessions.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_session() -> StoredSession {
        StoredSession {
            auth_type: AuthType::InstalledApp,
            token: Some(
                Token::new("test-access-token", "bearer", 3600, vec!["identity".to_string()])
                    .with_refresh_token("test-refresh-token"),
            ),
            revoked: false,
            stored_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_in_memory_store_and_retrieve() {
        let storage = InMemoryTokenStorage::new();

        storage.store("user1", create_test_session()).await.unwrap();

        let retrieved = storage.retrieve("user1").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(
            retrieved.unwrap().token.unwrap().access_token,
            "test-access-token"
        );
    }

    #[tokio::test]
    async fn test_in_memory_delete() {
        let storage = InMemoryTokenStorage::new();

        storage.store("user1", create_test_session()).await.unwrap();
        assert!(storage.exists("user1").await.unwrap());

        assert!(storage.delete("user1").await.unwrap());
        assert!(!storage.exists("user1").await.unwrap());
        assert!(!storage.delete("user1").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_storage_history() {
        let storage = MockTokenStorage::new();

        storage.store("test-key", create_test_session()).await.unwrap();
        assert_eq!(storage.get_store_history().len(), 1);

        let retrieved = storage.retrieve("test-key").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(storage.get_retrieve_history(), vec!["test-key".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_storage_failure() {
        let storage = MockTokenStorage::new();
        storage.set_should_fail(true);

        let result = storage.store("key", create_test_session()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_in_memory_clear() {
        let storage = InMemoryTokenStorage::new();

        tokio_test::block_on(async {
            storage.store("a", create_test_session()).await.unwrap();
            storage.store("b", create_test_session()).await.unwrap();
            storage.clear().await.unwrap();

            assert!(!storage.exists("a").await.unwrap());
            assert!(storage.retrieve("b").await.unwrap().is_none());
        });
    }

    #[test]
    fn test_stored_session_json() {
        let session = create_test_session();
        let json = session.to_json().unwrap();
        assert!(json.contains("\"INSTALLED_APP\""));

        let parsed = StoredSession::from_json(&json).unwrap();
        assert_eq!(parsed, session);

        assert!(matches!(
            StoredSession::from_json("{}"),
            Err(PresenterError::Storage(StorageError::CorruptedData { .. }))
        ));
    }
}
