//! Configuration Builder
//!
//! Fluent builder for presenter configuration.

use crate::error::PresenterError;
use crate::types::{Notice, PresenterConfig};

/// Presenter configuration builder.
pub struct PresenterConfigBuilder {
    config: PresenterConfig,
}

impl PresenterConfigBuilder {
    /// Create new builder starting from the defaults.
    pub fn new() -> Self {
        Self {
            config: PresenterConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: PresenterConfig) -> Self {
        Self { config }
    }

    /// Set the strftime layout of status timestamps.
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.config.timestamp_format = format.into();
        self
    }

    /// Set the revoked-token notice.
    pub fn revoked_notice(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.config.revoked_notice = Notice {
            title: title.into(),
            message: message.into(),
        };
        self
    }

    /// Set the notification shown after a successful renew.
    pub fn renew_notification(mut self, message: impl Into<String>) -> Self {
        self.config.renew_notification = message.into();
        self
    }

    /// Set the notification shown after a successful revoke.
    pub fn revoke_notification(mut self, message: impl Into<String>) -> Self {
        self.config.revoke_notification = message.into();
        self
    }

    /// Also notify when an action fails.
    pub fn notify_on_failure(mut self, enable: bool) -> Self {
        self.config.notify_on_failure = enable;
        self
    }

    /// Set the session storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Build the presenter configuration.
    pub fn build(self) -> Result<PresenterConfig, PresenterError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for PresenterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new presenter configuration builder.
pub fn presenter_config() -> PresenterConfigBuilder {
    PresenterConfigBuilder::new()
}
