//! Builders
//!
//! Fluent builder patterns for configuration, credentials and the presenter.

pub mod config;
pub mod credentials;
pub mod presenter;

pub use config::{presenter_config, PresenterConfigBuilder};
pub use credentials::{app_credentials, AppCredentialsBuilder};
pub use presenter::{token_presenter, TokenPresenterBuilder};
