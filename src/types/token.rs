//! Token Types
//!
//! Token snapshot exposed by a bearer.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Token held by a bearer.
///
/// All fields are display-only from the presenter's point of view.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Access token.
    pub access_token: String,
    /// Refresh token (absent for userless and some script sessions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token type (usually "bearer").
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// When the access token expires.
    pub expiration_time: DateTime<Utc>,
    /// When the access token was issued.
    pub created_time: DateTime<Utc>,
    /// Granted scopes.
    #[serde(default)]
    pub scopes: Vec<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Token {
    /// Create a token issued now that lives for `expires_in_secs`.
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in_secs: i64,
        scopes: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            token_type: token_type.into(),
            expiration_time: now + Duration::seconds(expires_in_secs),
            created_time: now,
            scopes,
        }
    }

    /// Set the refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self) -> bool {
        self.expiration_time <= Utc::now()
    }

    /// Remaining lifetime in seconds, zero once expired.
    pub fn remaining_lifetime(&self) -> i64 {
        let now = Utc::now();
        if self.expiration_time > now {
            (self.expiration_time - now).num_seconds()
        } else {
            0
        }
    }

    /// Scopes rendered as `[a, b]`.
    pub fn scopes_text(&self) -> String {
        format!("[{}]", self.scopes.join(", "))
    }

    /// Refresh token rendered for display, `null` when absent.
    pub fn refresh_token_text(&self) -> &str {
        self.refresh_token.as_deref().unwrap_or("null")
    }

    /// Expiration time rendered as RFC 3339.
    pub fn expiration_text(&self) -> String {
        self.expiration_time
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Creation time rendered as RFC 3339.
    pub fn created_text(&self) -> String {
        self.created_time.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_type", &self.token_type)
            .field("expiration_time", &self.expiration_time)
            .field("created_time", &self.created_time)
            .field("scopes", &self.scopes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_token_parsing() {
        let json = r#"{
            "access_token": "test-token",
            "refresh_token": "test-refresh",
            "expiration_time": "2024-03-01T10:00:00Z",
            "created_time": "2024-03-01T09:00:00Z",
            "scopes": ["identity", "read"]
        }"#;

        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "test-token");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.refresh_token, Some("test-refresh".to_string()));
        assert_eq!(token.scopes, vec!["identity", "read"]);
        assert_eq!(token.expiration_text(), "2024-03-01T10:00:00Z");
        assert_eq!(token.created_text(), "2024-03-01T09:00:00Z");
    }

    #[test]
    fn test_display_helpers() {
        let mut token = Token::new("a", "bearer", 3600, vec!["identity".into(), "read".into()]);
        assert_eq!(token.scopes_text(), "[identity, read]");
        assert_eq!(token.refresh_token_text(), "null");

        token = token.with_refresh_token("r");
        assert_eq!(token.refresh_token_text(), "r");
    }

    #[test]
    fn test_expiry() {
        let mut token = Token::new("a", "bearer", 30, Vec::new());
        assert!(!token.is_expired());
        assert!(token.remaining_lifetime() > 0);

        token.expiration_time = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(token.is_expired());
        assert_eq!(token.remaining_lifetime(), 0);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let token = Token::new("secret-access", "bearer", 60, Vec::new())
            .with_refresh_token("secret-refresh");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("[REDACTED]"));
    }
}
