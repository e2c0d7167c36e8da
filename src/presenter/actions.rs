//! Token Actions
//!
//! Background execution of renew and revoke, and the status text their
//! completions carry back to the presenter.

use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

use crate::bearer::TokenBearer;
use crate::core::Clock;
use crate::error::BearerError;
use crate::types::TokenAction;

/// Result of a background token action, delivered to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Action that completed.
    pub action: TokenAction,
    /// Status line to display.
    pub status: String,
    /// Fault raised by the bearer, if any.
    pub error: Option<BearerError>,
}

impl Completion {
    /// Build the completion for `result`, stamping success with the current time.
    pub fn from_result(
        action: TokenAction,
        result: Result<(), BearerError>,
        bearer: &dyn TokenBearer,
        clock: &dyn Clock,
        timestamp_format: &str,
    ) -> Self {
        match result {
            Ok(()) => {
                let now = clock.timestamp(timestamp_format);
                let status = match action {
                    TokenAction::Renew => renewed_message(
                        &bearer
                            .access_token()
                            .unwrap_or_else(|| "null".to_string()),
                        &now,
                    ),
                    TokenAction::Revoke => revoked_message(&now),
                };
                Self {
                    action,
                    status,
                    error: None,
                }
            }
            Err(error) => Self::fault(action, error),
        }
    }

    /// Build the completion for a failed action.
    pub fn fault(action: TokenAction, error: BearerError) -> Self {
        Self {
            action,
            status: failure_message(action, &error),
            error: Some(error),
        }
    }

    /// Check if the bearer operation succeeded.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Status after a successful renew.
pub fn renewed_message(access_token: &str, timestamp: &str) -> String {
    format!("{}, Refreshed {}", access_token, timestamp)
}

/// Status after a successful revoke.
pub fn revoked_message(timestamp: &str) -> String {
    format!("Token was revoked {}", timestamp)
}

/// Status after a failed action; always carries the fault message verbatim.
pub fn failure_message(action: TokenAction, error: &BearerError) -> String {
    match action {
        TokenAction::Renew => format!(
            "A problem occurred while refreshing the token, with exception: {}",
            error.message()
        ),
        TokenAction::Revoke => format!(
            "A problem has occurred while revoking the token, with message: {}",
            error.message()
        ),
    }
}

/// Run `action` against `bearer`, turning a panic into a fault.
pub async fn run_action(bearer: &dyn TokenBearer, action: TokenAction) -> Result<(), BearerError> {
    let operation = match action {
        TokenAction::Renew => bearer.renew_token(),
        TokenAction::Revoke => bearer.revoke_token(),
    };

    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(BearerError::Panicked {
            message: panic_message(&*payload),
        }),
    }
}

/// Run `action` and build its completion.
///
/// Always yields a completion: a panic while running the action or while
/// formatting its status becomes a `Panicked` fault.
pub async fn complete_action(
    bearer: &dyn TokenBearer,
    action: TokenAction,
    clock: &dyn Clock,
    timestamp_format: &str,
) -> Completion {
    let completion = async {
        let result = run_action(bearer, action).await;
        Completion::from_result(action, result, bearer, clock, timestamp_format)
    };

    match AssertUnwindSafe(completion).catch_unwind().await {
        Ok(completion) => completion,
        Err(payload) => Completion::fault(
            action,
            BearerError::Panicked {
                message: panic_message(&*payload),
            },
        ),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "bearer operation panicked".to_string()
    }
}
