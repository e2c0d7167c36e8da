//! Credential Types
//!
//! Authentication types and the credentials each one needs.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Authentication type of a bearer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    /// Installed application (authorization code, no secret).
    InstalledApp,
    /// Application-only access without a user.
    Userless,
    /// Personal script with username and password.
    Script,
    /// Web application with a confidential secret.
    #[serde(rename = "WEBAPP")]
    WebApp,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InstalledApp => "INSTALLED_APP",
            Self::Userless => "USERLESS",
            Self::Script => "SCRIPT",
            Self::WebApp => "WEBAPP",
        }
    }
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials supplied for a persisted session.
///
/// `Unsupported` is returned for authentication types this application has
/// no credentials for, so adding an `AuthType` forces every provider to
/// decide explicitly.
#[derive(Clone)]
pub enum Credentials {
    /// Installed application credentials.
    Application {
        client_id: String,
        redirect_url: String,
    },
    /// Userless credentials bound to a device id.
    Userless { client_id: String, device_id: String },
    /// Script credentials.
    Script {
        client_id: String,
        client_secret: SecretString,
        username: String,
        password: SecretString,
    },
    /// No credentials for this authentication type.
    Unsupported(AuthType),
}

impl Credentials {
    /// Authentication type these credentials belong to.
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::Application { .. } => AuthType::InstalledApp,
            Self::Userless { .. } => AuthType::Userless,
            Self::Script { .. } => AuthType::Script,
            Self::Unsupported(auth_type) => *auth_type,
        }
    }

    /// Check if these credentials can restore a session.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Client ID, if any.
    pub fn client_id(&self) -> Option<&str> {
        match self {
            Self::Application { client_id, .. }
            | Self::Userless { client_id, .. }
            | Self::Script { client_id, .. } => Some(client_id),
            Self::Unsupported(_) => None,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application {
                client_id,
                redirect_url,
            } => f
                .debug_struct("Application")
                .field("client_id", client_id)
                .field("redirect_url", redirect_url)
                .finish(),
            Self::Userless {
                client_id,
                device_id,
            } => f
                .debug_struct("Userless")
                .field("client_id", client_id)
                .field("device_id", device_id)
                .finish(),
            Self::Script {
                client_id,
                username,
                ..
            } => f
                .debug_struct("Script")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Unsupported(auth_type) => f.debug_tuple("Unsupported").field(auth_type).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_type_as_str() {
        assert_eq!(AuthType::InstalledApp.as_str(), "INSTALLED_APP");
        assert_eq!(AuthType::Userless.to_string(), "USERLESS");
        assert_eq!(AuthType::Script.to_string(), "SCRIPT");
        assert_eq!(AuthType::WebApp.to_string(), "WEBAPP");
    }

    #[test]
    fn test_auth_type_serde() {
        let json = serde_json::to_string(&AuthType::InstalledApp).unwrap();
        assert_eq!(json, "\"INSTALLED_APP\"");

        let parsed: AuthType = serde_json::from_str("\"WEBAPP\"").unwrap();
        assert_eq!(parsed, AuthType::WebApp);
    }

    #[test]
    fn test_credentials_auth_type() {
        let creds = Credentials::Userless {
            client_id: "client".to_string(),
            device_id: "device".to_string(),
        };
        assert_eq!(creds.auth_type(), AuthType::Userless);
        assert_eq!(creds.client_id(), Some("client"));
        assert!(creds.is_supported());

        let unsupported = Credentials::Unsupported(AuthType::WebApp);
        assert_eq!(unsupported.auth_type(), AuthType::WebApp);
        assert!(!unsupported.is_supported());
        assert_eq!(unsupported.client_id(), None);
    }

    #[test]
    fn test_script_debug_redacts_secrets() {
        let creds = Credentials::Script {
            client_id: "client".to_string(),
            client_secret: SecretString::new("hunter2".to_string()),
            username: "user".to_string(),
            password: SecretString::new("p4ss".to_string()),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("p4ss"));
        assert!(debug.contains("user"));
    }
}
