//! Bearer Contract
//!
//! The session object owned by the external auth library. The presenter
//! holds at most one `Arc<dyn TokenBearer>` and never manages its lifecycle.

pub mod mock;

use async_trait::async_trait;

use crate::error::BearerError;
use crate::types::{AuthType, SessionState, Token};

pub use mock::{create_mock_token_bearer, MockTokenBearer};

/// Authenticated session able to renew and revoke its token.
///
/// Implementations must tolerate `renew_token` and `revoke_token` being
/// driven from a worker task while the getters are read elsewhere.
#[async_trait]
pub trait TokenBearer: Send + Sync {
    /// Check if the session is authenticated.
    fn is_authed(&self) -> bool;

    /// Authentication type of the session.
    fn auth_type(&self) -> AuthType;

    /// Current token, if any.
    fn token(&self) -> Option<Token>;

    /// Check if the token was revoked.
    fn is_revoked(&self) -> bool;

    /// Current access token value, if any.
    fn access_token(&self) -> Option<String>;

    /// Exchange the refresh token for a new access token.
    async fn renew_token(&self) -> Result<(), BearerError>;

    /// Invalidate the current token.
    async fn revoke_token(&self) -> Result<(), BearerError>;
}

/// Session state of an optional bearer.
pub fn session_state(bearer: Option<&dyn TokenBearer>) -> SessionState {
    match bearer {
        None => SessionState::NoBearer,
        Some(bearer) if bearer.is_revoked() => SessionState::Revoked,
        Some(_) => SessionState::Active,
    }
}
