//! Credential Provider
//!
//! Maps the authentication type of a persisted session to the credentials
//! needed to restore it.

use crate::core::generate_device_id;
use crate::types::{AppCredentials, AuthType, Credentials};

/// Credential provider interface.
pub trait CredentialProvider: Send + Sync {
    /// Credentials for `auth_type`, or `Credentials::Unsupported`.
    fn provide(&self, auth_type: AuthType) -> Credentials;
}

impl<F> CredentialProvider for F
where
    F: Fn(AuthType) -> Credentials + Send + Sync,
{
    fn provide(&self, auth_type: AuthType) -> Credentials {
        self(auth_type)
    }
}

/// Provider backed by the application's configured credentials.
pub struct AppCredentialProvider {
    credentials: AppCredentials,
    device_id: String,
}

impl AppCredentialProvider {
    /// Create provider with a freshly generated device id.
    pub fn new(credentials: AppCredentials) -> Self {
        Self::with_device_id(credentials, generate_device_id())
    }

    /// Create provider with a known device id.
    pub fn with_device_id(credentials: AppCredentials, device_id: impl Into<String>) -> Self {
        Self {
            credentials,
            device_id: device_id.into(),
        }
    }

    /// Device id used for userless credentials.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    fn script_credentials(&self) -> Option<Credentials> {
        let c = &self.credentials;
        Some(Credentials::Script {
            client_id: c.script_client_id.clone()?,
            client_secret: c.script_client_secret.clone()?,
            username: c.username.clone()?,
            password: c.password.clone()?,
        })
    }
}

impl CredentialProvider for AppCredentialProvider {
    fn provide(&self, auth_type: AuthType) -> Credentials {
        match auth_type {
            AuthType::InstalledApp => Credentials::Application {
                client_id: self.credentials.client_id.clone(),
                redirect_url: self.credentials.redirect_url.clone(),
            },
            AuthType::Userless => Credentials::Userless {
                client_id: self.credentials.client_id.clone(),
                device_id: self.device_id.clone(),
            },
            AuthType::Script => self
                .script_credentials()
                .unwrap_or(Credentials::Unsupported(AuthType::Script)),
            AuthType::WebApp => Credentials::Unsupported(AuthType::WebApp),
        }
    }
}
