//! Configuration Types
//!
//! Presenter settings and the application credentials used to restore
//! persisted sessions.

use chrono::format::{Item, StrftimeItems};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, PresenterError};

/// Timestamp layout used in status messages (day-month-year hour:minute).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";
/// Storage key of the persisted session.
pub const DEFAULT_STORAGE_KEY: &str = "auth_session";

/// Modal notice content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Presenter configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// strftime layout for the timestamp appended to success messages.
    pub timestamp_format: String,
    /// Modal shown when an action is attempted on a revoked token.
    pub revoked_notice: Notice,
    /// Transient notification after a successful renew.
    pub renew_notification: String,
    /// Transient notification after a successful revoke.
    pub revoke_notification: String,
    /// Also show the transient notification when the operation failed.
    pub notify_on_failure: bool,
    /// Key under which the session is persisted.
    pub storage_key: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            revoked_notice: Notice {
                title: "Action not available!".to_string(),
                message: "The token was revoked, and no action can be done upon it anymore."
                    .to_string(),
            },
            renew_notification: "Token refreshed successfully".to_string(),
            revoke_notification: "Token revoked successfully".to_string(),
            notify_on_failure: false,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl PresenterConfig {
    /// Parse configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PresenterError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            PresenterError::Configuration(ConfigurationError::InvalidConfig {
                message: e.to_string(),
            })
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check the timestamp layout and storage key.
    pub fn validate(&self) -> Result<(), PresenterError> {
        let format = &self.timestamp_format;
        if format.is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(PresenterError::Configuration(
                ConfigurationError::InvalidTimestampFormat {
                    format: format.clone(),
                },
            ));
        }

        if self.storage_key.is_empty() {
            return Err(PresenterError::Configuration(
                ConfigurationError::MissingRequired {
                    field: "storage_key".to_string(),
                },
            ));
        }

        Ok(())
    }
}

/// Application credentials for every supported authentication type.
#[derive(Clone, Deserialize)]
pub struct AppCredentials {
    /// Client ID of the installed application.
    pub client_id: String,
    /// Redirect URL registered for the installed application.
    pub redirect_url: String,
    /// Client ID of the script application.
    #[serde(default)]
    pub script_client_id: Option<String>,
    /// Client secret of the script application.
    #[serde(default)]
    pub script_client_secret: Option<SecretString>,
    /// Account username for script access.
    #[serde(default)]
    pub username: Option<String>,
    /// Account password for script access.
    #[serde(default)]
    pub password: Option<SecretString>,
}

impl AppCredentials {
    /// Parse credentials from JSON.
    pub fn from_json(json: &str) -> Result<Self, PresenterError> {
        let credentials: Self = serde_json::from_str(json).map_err(|e| {
            PresenterError::Configuration(ConfigurationError::InvalidConfig {
                message: e.to_string(),
            })
        })?;

        if credentials.client_id.is_empty() {
            return Err(PresenterError::Configuration(
                ConfigurationError::MissingRequired {
                    field: "client_id".to_string(),
                },
            ));
        }

        Ok(credentials)
    }

    /// Check if every script field is configured.
    pub fn has_script_access(&self) -> bool {
        self.script_client_id.is_some()
            && self.script_client_secret.is_some()
            && self.username.is_some()
            && self.password.is_some()
    }
}

impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("client_id", &self.client_id)
            .field("redirect_url", &self.redirect_url)
            .field("script_client_id", &self.script_client_id)
            .field("script_client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PresenterConfig::default();
        assert_eq!(config.timestamp_format, "%d-%m-%Y %H:%M");
        assert_eq!(config.revoked_notice.title, "Action not available!");
        assert!(!config.notify_on_failure);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = PresenterConfig::from_json(r#"{"notify_on_failure": true}"#).unwrap();
        assert!(config.notify_on_failure);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_config_from_invalid_json() {
        let result = PresenterConfig::from_json("{not json");
        assert!(matches!(
            result,
            Err(PresenterError::Configuration(
                ConfigurationError::InvalidConfig { .. }
            ))
        ));
    }

    #[test]
    fn test_config_from_json_rejects_invalid_timestamp_format() {
        let result = PresenterConfig::from_json(r#"{"timestamp_format": "%Q"}"#);
        assert!(matches!(
            result,
            Err(PresenterError::Configuration(
                ConfigurationError::InvalidTimestampFormat { .. }
            ))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(PresenterConfig::default().validate().is_ok());

        let config = PresenterConfig {
            storage_key: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_app_credentials_from_json() {
        let json = r#"{
            "client_id": "installed-client",
            "redirect_url": "https://example.com/callback",
            "script_client_id": "script-client",
            "script_client_secret": "script-secret",
            "username": "user",
            "password": "pass"
        }"#;

        let credentials = AppCredentials::from_json(json).unwrap();
        assert_eq!(credentials.client_id, "installed-client");
        assert!(credentials.has_script_access());

        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("script-secret"));
        assert!(!debug.contains("\"pass\""));
    }

    #[test]
    fn test_app_credentials_requires_client_id() {
        let json = r#"{"client_id": "", "redirect_url": "https://example.com"}"#;
        let result = AppCredentials::from_json(json);
        assert!(matches!(
            result,
            Err(PresenterError::Configuration(
                ConfigurationError::MissingRequired { .. }
            ))
        ));
    }
}
