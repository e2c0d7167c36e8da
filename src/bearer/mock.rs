//! Mock Bearer
//!
//! Scriptable bearer for tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::bearer::TokenBearer;
use crate::error::BearerError;
use crate::types::{AuthType, Token};

struct MockState {
    token: Option<Token>,
    authed: bool,
    revoked: bool,
}

/// Mock token bearer for testing.
pub struct MockTokenBearer {
    auth_type: AuthType,
    state: Mutex<MockState>,
    renew_count: Mutex<u32>,
    revoke_count: Mutex<u32>,
    next_renew_error: Mutex<Option<BearerError>>,
    next_revoke_error: Mutex<Option<BearerError>>,
    panic_message: Mutex<Option<String>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockTokenBearer {
    /// Create an authenticated mock bearer with a fresh token.
    pub fn new(auth_type: AuthType) -> Self {
        let token = Token::new(
            "mock-access-token",
            "bearer",
            3600,
            vec!["identity".to_string(), "read".to_string()],
        )
        .with_refresh_token("mock-refresh-token");

        Self::with_token(auth_type, Some(token))
    }

    /// Create a mock bearer holding `token`; authenticated when a token is held.
    pub fn with_token(auth_type: AuthType, token: Option<Token>) -> Self {
        Self {
            auth_type,
            state: Mutex::new(MockState {
                authed: token.is_some(),
                token,
                revoked: false,
            }),
            renew_count: Mutex::new(0),
            revoke_count: Mutex::new(0),
            next_renew_error: Mutex::new(None),
            next_revoke_error: Mutex::new(None),
            panic_message: Mutex::new(None),
            gate: Mutex::new(None),
        }
    }

    /// Set revoked flag.
    pub fn set_revoked(&self, revoked: bool) -> &Self {
        self.state.lock().unwrap().revoked = revoked;
        self
    }

    /// Set next renew error.
    pub fn set_next_renew_error(&self, error: BearerError) -> &Self {
        *self.next_renew_error.lock().unwrap() = Some(error);
        self
    }

    /// Set next revoke error.
    pub fn set_next_revoke_error(&self, error: BearerError) -> &Self {
        *self.next_revoke_error.lock().unwrap() = Some(error);
        self
    }

    /// Panic inside the next renew or revoke.
    pub fn set_next_panic(&self, message: impl Into<String>) -> &Self {
        *self.panic_message.lock().unwrap() = Some(message.into());
        self
    }

    /// Hold renew and revoke until the returned handle is notified.
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Number of renew calls.
    pub fn renew_count(&self) -> u32 {
        *self.renew_count.lock().unwrap()
    }

    /// Number of revoke calls.
    pub fn revoke_count(&self) -> u32 {
        *self.revoke_count.lock().unwrap()
    }

    async fn wait_for_gate(&self) {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn check_panic(&self) {
        let message = self.panic_message.lock().unwrap().take();
        if let Some(message) = message {
            panic!("{}", message);
        }
    }
}

#[async_trait]
impl TokenBearer for MockTokenBearer {
    fn is_authed(&self) -> bool {
        self.state.lock().unwrap().authed
    }

    fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    fn token(&self) -> Option<Token> {
        self.state.lock().unwrap().token.clone()
    }

    fn is_revoked(&self) -> bool {
        self.state.lock().unwrap().revoked
    }

    fn access_token(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .token
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    async fn renew_token(&self) -> Result<(), BearerError> {
        let count = {
            let mut count = self.renew_count.lock().unwrap();
            *count += 1;
            *count
        };

        self.wait_for_gate().await;
        self.check_panic();

        if let Some(error) = self.next_renew_error.lock().unwrap().take() {
            return Err(error);
        }

        let mut state = self.state.lock().unwrap();
        let scopes = state
            .token
            .as_ref()
            .map(|t| t.scopes.clone())
            .unwrap_or_default();
        let refresh_token = state.token.as_ref().and_then(|t| t.refresh_token.clone());

        let mut token = Token::new(format!("renewed-access-token-{}", count), "bearer", 3600, scopes);
        token.refresh_token = refresh_token;
        state.token = Some(token);
        state.authed = true;
        Ok(())
    }

    async fn revoke_token(&self) -> Result<(), BearerError> {
        *self.revoke_count.lock().unwrap() += 1;

        self.wait_for_gate().await;
        self.check_panic();

        if let Some(error) = self.next_revoke_error.lock().unwrap().take() {
            return Err(error);
        }

        let mut state = self.state.lock().unwrap();
        state.token = None;
        state.authed = false;
        state.revoked = true;
        Ok(())
    }
}

/// Create mock token bearer for testing.
pub fn create_mock_token_bearer(auth_type: AuthType) -> MockTokenBearer {
    MockTokenBearer::new(auth_type)
}
