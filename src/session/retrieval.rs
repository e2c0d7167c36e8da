//! Saved Session Retrieval
//!
//! Loads a previously persisted bearer, if any.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::bearer::TokenBearer;
use crate::error::PresenterError;
use crate::session::{BearerFactory, CredentialProvider, StoredSession, TokenStorage};
use crate::types::{AuthType, Credentials};

/// Why no bearer was restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissReason {
    /// Nothing persisted under the storage key.
    NothingStored,
    /// The provider has no credentials for the persisted authentication type.
    Unsupported(AuthType),
}

/// Outcome of a retrieval.
pub enum Retrieval {
    /// A bearer was restored.
    Found {
        credentials: Credentials,
        bearer: Arc<dyn TokenBearer>,
    },
    /// No bearer could be restored.
    Miss(MissReason),
}

impl Retrieval {
    /// Check if a bearer was restored.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The restored bearer, if any.
    pub fn into_bearer(self) -> Option<Arc<dyn TokenBearer>> {
        match self {
            Self::Found { bearer, .. } => Some(bearer),
            Self::Miss(_) => None,
        }
    }
}

impl std::fmt::Debug for Retrieval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { credentials, bearer } => f
                .debug_struct("Found")
                .field("credentials", credentials)
                .field("auth_type", &bearer.auth_type())
                .finish(),
            Self::Miss(reason) => f.debug_tuple("Miss").field(reason).finish(),
        }
    }
}

/// Persisted session handle.
pub struct SavedSession<S: TokenStorage, F: BearerFactory> {
    storage: Arc<S>,
    factory: Arc<F>,
    key: String,
}

impl<S: TokenStorage, F: BearerFactory> SavedSession<S, F> {
    /// Create a handle on the session stored under `key`.
    pub fn new(storage: Arc<S>, factory: Arc<F>, key: impl Into<String>) -> Self {
        Self {
            storage,
            factory,
            key: key.into(),
        }
    }

    /// Storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Attempt to restore the persisted bearer.
    pub async fn retrieve(
        &self,
        provider: &dyn CredentialProvider,
    ) -> Result<Retrieval, PresenterError> {
        let Some(session) = self.storage.retrieve(&self.key).await? else {
            debug!(key = %self.key, "No persisted session");
            return Ok(Retrieval::Miss(MissReason::NothingStored));
        };

        let credentials = provider.provide(session.auth_type);
        if let Credentials::Unsupported(auth_type) = credentials {
            warn!(key = %self.key, auth_type = %auth_type, "Unsupported authentication type");
            return Ok(Retrieval::Miss(MissReason::Unsupported(auth_type)));
        }

        let bearer = self.factory.restore(&credentials, session)?;
        info!(
            key = %self.key,
            auth_type = %bearer.auth_type(),
            revoked = bearer.is_revoked(),
            "Restored persisted session"
        );

        Ok(Retrieval::Found {
            credentials,
            bearer,
        })
    }

    /// Persist a snapshot of `bearer`.
    pub async fn save(&self, bearer: &dyn TokenBearer) -> Result<(), PresenterError> {
        self.storage
            .store(&self.key, StoredSession::from_bearer(bearer))
            .await
    }

    /// Remove the persisted session.
    pub async fn forget(&self) -> Result<bool, PresenterError> {
        self.storage.delete(&self.key).await
    }
}
