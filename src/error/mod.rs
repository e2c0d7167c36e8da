//! Presenter Error Types
//!
//! Error hierarchy for session handling, bearer operations, storage and
//! configuration.

use thiserror::Error;

use crate::types::TokenAction;

/// Root error type for the token presenter.
#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Bearer error: {0}")]
    Bearer(#[from] BearerError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl PresenterError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Session(_) => "PRESENTER_SESSION",
            Self::Bearer(_) => "PRESENTER_BEARER",
            Self::Storage(_) => "PRESENTER_STORAGE",
            Self::Configuration(_) => "PRESENTER_CONFIG",
        }
    }

    /// Check if the error is the guarded revoked-token case.
    pub fn is_revoked(&self) -> bool {
        matches!(self, Self::Session(SessionError::Revoked))
    }

    /// Check if error requires a new sign-in before any token action.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            Self::Session(SessionError::NoActiveSession) | Self::Session(SessionError::Revoked)
        )
    }
}

/// Session-level error raised before any bearer operation is dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,

    #[error("The token was revoked, and no action can be done upon it anymore")]
    Revoked,

    #[error("Another token action is in flight: {action}")]
    ActionInFlight { action: TokenAction },
}

/// Fault raised by an external bearer operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BearerError {
    #[error("{message}")]
    RenewFailed { message: String },

    #[error("{message}")]
    RevokeFailed { message: String },

    #[error("{message}")]
    Network { message: String },

    #[error("{message}")]
    Panicked { message: String },
}

impl BearerError {
    /// The underlying fault message, verbatim.
    pub fn message(&self) -> &str {
        match self {
            Self::RenewFailed { message }
            | Self::RevokeFailed { message }
            | Self::Network { message }
            | Self::Panicked { message } => message,
        }
    }
}

/// Session storage error.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Read failed: {message}")]
    ReadFailed { message: String },

    #[error("Write failed: {message}")]
    WriteFailed { message: String },

    #[error("Delete failed: {message}")]
    DeleteFailed { message: String },

    #[error("Corrupted data: {message}")]
    CorruptedData { message: String },
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid timestamp format: {format}")]
    InvalidTimestampFormat { format: String },
}

/// Result type for presenter operations.
pub type PresenterResult<T> = Result<T, PresenterError>;

/// Get user-friendly error message.
pub fn get_user_message(error: &PresenterError) -> String {
    match error {
        PresenterError::Session(SessionError::NoActiveSession) => {
            "There is no active session. Please sign in first.".to_string()
        }
        PresenterError::Session(SessionError::Revoked) => {
            "The token was revoked, and no action can be done upon it anymore.".to_string()
        }
        PresenterError::Session(SessionError::ActionInFlight { .. }) => {
            "Please wait for the current token action to finish.".to_string()
        }
        PresenterError::Bearer(BearerError::Network { .. }) => {
            "The request failed. Please check your connection and try again.".to_string()
        }
        PresenterError::Storage(_) => {
            "The saved session could not be loaded. Please sign in again.".to_string()
        }
        _ => "A token error occurred. Please try again.".to_string(),
    }
}
