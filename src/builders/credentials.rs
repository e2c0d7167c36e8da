//! Credentials Builder
//!
//! Fluent builder for application credentials.

use secrecy::SecretString;

use crate::error::{ConfigurationError, PresenterError};
use crate::types::AppCredentials;

/// Application credentials builder.
#[derive(Default)]
pub struct AppCredentialsBuilder {
    client_id: Option<String>,
    redirect_url: Option<String>,
    script_client_id: Option<String>,
    script_client_secret: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
}

impl AppCredentialsBuilder {
    /// Create new credentials builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set installed application client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set installed application redirect URL.
    pub fn redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// Set script application credentials.
    pub fn script(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.script_client_id = Some(client_id.into());
        self.script_client_secret = Some(SecretString::new(client_secret.into()));
        self.username = Some(username.into());
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Build the application credentials.
    pub fn build(self) -> Result<AppCredentials, PresenterError> {
        let client_id = self.client_id.filter(|id| !id.is_empty()).ok_or_else(|| {
            PresenterError::Configuration(ConfigurationError::MissingRequired {
                field: "client_id".to_string(),
            })
        })?;

        let redirect_url = self.redirect_url.ok_or_else(|| {
            PresenterError::Configuration(ConfigurationError::MissingRequired {
                field: "redirect_url".to_string(),
            })
        })?;

        Ok(AppCredentials {
            client_id,
            redirect_url,
            script_client_id: self.script_client_id,
            script_client_secret: self.script_client_secret,
            username: self.username,
            password: self.password,
        })
    }
}

/// Create a new application credentials builder.
pub fn app_credentials() -> AppCredentialsBuilder {
    AppCredentialsBuilder::new()
}
