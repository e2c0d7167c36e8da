//! Display Types
//!
//! Text projected onto the token info screen.

/// The six token text fields. Every field is empty when no token is held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenFields {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: String,
    pub created_time: String,
    pub scopes: String,
}

impl TokenFields {
    /// Check if every field is blank.
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(|field| field.is_empty())
    }

    /// Fields in screen order.
    pub fn as_array(&self) -> [&str; 6] {
        [
            &self.access_token,
            &self.refresh_token,
            &self.token_type,
            &self.expires_in,
            &self.created_time,
            &self.scopes,
        ]
    }
}

/// Screen content derived from a bearer and an optional status message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub is_authed_text: String,
    pub auth_type_text: String,
    pub token_fields: TokenFields,
    /// Status line; `None` hides it.
    pub status_message: Option<String>,
}

impl DisplayState {
    /// Check if the status line is visible.
    pub fn is_message_visible(&self) -> bool {
        self.status_message.is_some()
    }
}
