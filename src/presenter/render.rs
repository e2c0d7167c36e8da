//! Rendering
//!
//! Pure projection of bearer state onto display text.

use crate::bearer::TokenBearer;
use crate::types::{DisplayState, TokenFields};

/// Compute the screen content for an optional bearer and status message.
pub fn render(bearer: Option<&dyn TokenBearer>, message: Option<&str>) -> DisplayState {
    let is_authed = bearer.map(|b| b.is_authed()).unwrap_or(false);
    let auth_type = bearer
        .map(|b| b.auth_type().to_string())
        .unwrap_or_else(|| "NONE".to_string());

    let token_fields = match bearer.and_then(|b| b.token()) {
        Some(token) => TokenFields {
            access_token: format!("AccessToken: {}", token.access_token),
            refresh_token: format!("RefreshToken: {}", token.refresh_token_text()),
            token_type: format!("TokenType: {}", token.token_type),
            expires_in: format!("ExpiresIn: {}", token.expiration_text()),
            created_time: format!("CreatedTime: {}", token.created_text()),
            scopes: format!("Scopes: {}", token.scopes_text()),
        },
        None => TokenFields::default(),
    };

    DisplayState {
        is_authed_text: format!("IsAuthed: {}", is_authed),
        auth_type_text: format!("AuthType: {}", auth_type),
        token_fields,
        status_message: message.map(String::from),
    }
}
