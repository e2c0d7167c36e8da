//! Token Presenter
//!
//! Presents the state of an OAuth2 session ("bearer") held by an external
//! authentication library and drives its renew and revoke operations.
//!
//! # Features
//!
//! - Pure rendering of bearer state into display text
//! - Background renew/revoke with fault capture and timestamped status
//! - Revoked-token guard and single in-flight action
//! - Restoring a persisted session through pluggable storage, credentials
//!   and bearer construction
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_presenter::{token_presenter, AuthType, ConsoleSurface, MockTokenBearer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut presenter = token_presenter().build(ConsoleSurface::new())?;
//!     presenter.attach(Arc::new(MockTokenBearer::new(AuthType::InstalledApp)));
//!     presenter.refresh(None);
//!
//!     presenter.renew()?;
//!     presenter.next_completion().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: tokens, credentials, display state and configuration
//! - `error`: error hierarchy
//! - `core`: clock and device id infrastructure
//! - `bearer`: the bearer contract and a mock implementation
//! - `session`: storage, credential provider and retrieval of saved sessions
//! - `presenter`: rendering and the renew/revoke actions
//! - `surface`: where the presenter draws
//! - `builders`: fluent builders for configuration and the presenter
//! - `telemetry`: logging setup

pub mod bearer;
pub mod builders;
pub mod core;
pub mod error;
pub mod presenter;
pub mod session;
pub mod surface;
pub mod telemetry;
pub mod types;

// Re-export presenter
pub use presenter::{render, Completion, TokenPresenter};

// Re-export builders
pub use builders::{
    app_credentials, presenter_config, token_presenter, AppCredentialsBuilder,
    PresenterConfigBuilder, TokenPresenterBuilder,
};

// Re-export errors
pub use error::{
    get_user_message, BearerError, ConfigurationError, PresenterError, PresenterResult,
    SessionError, StorageError,
};

// Re-export types
pub use types::{
    // Config
    AppCredentials, Notice, PresenterConfig,
    // Credentials
    AuthType, Credentials,
    // Display
    DisplayState, TokenFields,
    // Actions
    MenuAction, SessionState, TokenAction,
    // Token
    Token,
};

// Re-export core components
pub use crate::core::{generate_device_id, Clock, FixedClock, SystemClock};

// Re-export bearer contract
pub use bearer::{create_mock_token_bearer, MockTokenBearer, TokenBearer};

// Re-export session retrieval
pub use session::{
    AppCredentialProvider, BearerFactory, CredentialProvider, InMemoryTokenStorage, MissReason,
    MockBearerFactory, MockTokenStorage, Retrieval, SavedSession, StoredSession, TokenStorage,
};

// Re-export surfaces
pub use surface::{ConsoleSurface, RecordingSurface, Surface, SurfaceEvent};

// Re-export telemetry
pub use telemetry::{LogFormat, LogLevel, LoggingConfig};
