//! Bearer Factory
//!
//! Restores a live bearer from credentials and a persisted session.

use std::sync::{Arc, Mutex};

use crate::bearer::{MockTokenBearer, TokenBearer};
use crate::error::PresenterError;
use crate::session::StoredSession;
use crate::types::{AuthType, Credentials};

/// Bearer factory interface, implemented by the auth library adapter.
pub trait BearerFactory: Send + Sync {
    /// Build a bearer for `session` using `credentials`.
    fn restore(
        &self,
        credentials: &Credentials,
        session: StoredSession,
    ) -> Result<Arc<dyn TokenBearer>, PresenterError>;
}

/// Factory producing `MockTokenBearer`s.
#[derive(Default)]
pub struct MockBearerFactory {
    restore_history: Mutex<Vec<AuthType>>,
    next_error: Mutex<Option<PresenterError>>,
}

impl MockBearerFactory {
    /// Create new mock factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set next error.
    pub fn set_next_error(&self, error: PresenterError) -> &Self {
        *self.next_error.lock().unwrap() = Some(error);
        self
    }

    /// Authentication types restored so far.
    pub fn get_restore_history(&self) -> Vec<AuthType> {
        self.restore_history.lock().unwrap().clone()
    }
}

impl BearerFactory for MockBearerFactory {
    fn restore(
        &self,
        credentials: &Credentials,
        session: StoredSession,
    ) -> Result<Arc<dyn TokenBearer>, PresenterError> {
        if let Some(error) = self.next_error.lock().unwrap().take() {
            return Err(error);
        }

        let auth_type = credentials.auth_type();
        self.restore_history.lock().unwrap().push(auth_type);

        let bearer = MockTokenBearer::with_token(auth_type, session.token);
        bearer.set_revoked(session.revoked);
        Ok(Arc::new(bearer))
    }
}
