//! Presenter Builder
//!
//! Wires configuration, clock and worker runtime into a `TokenPresenter`.

use std::sync::Arc;
use tokio::runtime::Handle;

use crate::core::{Clock, SystemClock};
use crate::error::{ConfigurationError, PresenterError};
use crate::presenter::TokenPresenter;
use crate::surface::Surface;
use crate::types::PresenterConfig;

/// Token presenter builder.
#[derive(Default)]
pub struct TokenPresenterBuilder {
    config: Option<PresenterConfig>,
    clock: Option<Arc<dyn Clock>>,
    worker: Option<Handle>,
}

impl TokenPresenterBuilder {
    /// Create new presenter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration.
    pub fn config(mut self, config: PresenterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set clock (defaults to the system clock).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the runtime bearer operations are spawned on (defaults to the
    /// current one).
    pub fn worker(mut self, worker: Handle) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Build a presenter drawing on `surface`.
    pub fn build<S: Surface>(self, surface: S) -> Result<TokenPresenter<S>, PresenterError> {
        let worker = match self.worker {
            Some(worker) => worker,
            None => Handle::try_current().map_err(|e| {
                PresenterError::Configuration(ConfigurationError::InvalidConfig {
                    message: format!("no tokio runtime for token actions: {}", e),
                })
            })?,
        };

        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(TokenPresenter::new(
            config,
            surface,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            worker,
        ))
    }
}

/// Create a new presenter builder.
pub fn token_presenter() -> TokenPresenterBuilder {
    TokenPresenterBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::types::SessionState;

    #[test]
    fn test_build_outside_runtime_fails() {
        let result = token_presenter().build(RecordingSurface::new());
        assert!(matches!(
            result,
            Err(PresenterError::Configuration(
                ConfigurationError::InvalidConfig { .. }
            ))
        ));
    }

    #[test]
    fn test_build_with_explicit_worker() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let presenter = token_presenter()
            .worker(runtime.handle().clone())
            .build(RecordingSurface::new())
            .unwrap();

        assert_eq!(presenter.session_state(), SessionState::NoBearer);
    }

    #[tokio::test]
    async fn test_build_rejects_invalid_timestamp_format() {
        let config = PresenterConfig {
            timestamp_format: "%Q".to_string(),
            ..Default::default()
        };
        let result = token_presenter().config(config).build(RecordingSurface::new());
        assert!(matches!(
            result,
            Err(PresenterError::Configuration(
                ConfigurationError::InvalidTimestampFormat { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_build_in_runtime() {
        let config = PresenterConfig {
            notify_on_failure: true,
            ..Default::default()
        };
        let presenter = token_presenter()
            .config(config)
            .build(RecordingSurface::new())
            .unwrap();

        assert!(presenter.config().notify_on_failure);
    }
}
