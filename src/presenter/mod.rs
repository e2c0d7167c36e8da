//! Token Presenter
//!
//! Holds the optional bearer, renders it, and drives renew and revoke.
//!
//! The presenter is owned by a single (UI) context: every mutation takes
//! `&mut self`. Bearer operations run on a tokio worker and hand their
//! [`Completion`] back over a channel; nothing touches the surface until the
//! owner applies the completion with [`TokenPresenter::next_completion`] or
//! [`TokenPresenter::apply_completion`]. At most one action is in flight.

pub mod actions;
pub mod render;

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bearer::{session_state, TokenBearer};
use crate::core::Clock;
use crate::error::{PresenterError, PresenterResult, SessionError};
use crate::session::{BearerFactory, CredentialProvider, Retrieval, SavedSession, TokenStorage};
use crate::surface::Surface;
use crate::types::{DisplayState, MenuAction, PresenterConfig, SessionState, TokenAction};

pub use actions::{
    complete_action, failure_message, renewed_message, revoked_message, run_action, Completion,
};
pub use render::render;

/// Presenter for the token info screen.
pub struct TokenPresenter<S: Surface> {
    config: PresenterConfig,
    surface: S,
    clock: Arc<dyn Clock>,
    worker: Handle,
    bearer: Option<Arc<dyn TokenBearer>>,
    in_flight: Option<TokenAction>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<S: Surface> TokenPresenter<S> {
    /// Create a presenter spawning bearer operations on `worker`.
    pub fn new(config: PresenterConfig, surface: S, clock: Arc<dyn Clock>, worker: Handle) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            config,
            surface,
            clock,
            worker,
            bearer: None,
            in_flight: None,
            completion_tx,
            completion_rx,
        }
    }

    /// Presenter configuration.
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// The surface being drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The held bearer, if any.
    pub fn bearer(&self) -> Option<&Arc<dyn TokenBearer>> {
        self.bearer.as_ref()
    }

    /// Current session state, read from the held bearer.
    pub fn session_state(&self) -> SessionState {
        session_state(self.bearer.as_deref())
    }

    /// Action currently running in the background, if any.
    pub fn in_flight(&self) -> Option<TokenAction> {
        self.in_flight
    }

    /// Hold `bearer`, replacing any previous one.
    pub fn attach(&mut self, bearer: Arc<dyn TokenBearer>) {
        debug!(auth_type = %bearer.auth_type(), "Bearer attached");
        self.bearer = Some(bearer);
    }

    /// Drop the held bearer.
    pub fn detach(&mut self) {
        if self.bearer.take().is_some() {
            debug!("Bearer detached");
        }
    }

    /// Render the held bearer with `message` and show it.
    pub fn refresh(&mut self, message: Option<&str>) -> DisplayState {
        let state = render(self.bearer.as_deref(), message);
        self.surface.show(&state);
        state
    }

    /// Restore the persisted session and show it.
    ///
    /// A found bearer is attached, a miss detaches. The screen is rendered
    /// without a status message in both cases, and also when retrieval fails.
    pub async fn load_session<T, F>(
        &mut self,
        session: &SavedSession<T, F>,
        provider: &dyn CredentialProvider,
    ) -> PresenterResult<SessionState>
    where
        T: TokenStorage,
        F: BearerFactory,
    {
        let retrieval = session.retrieve(provider).await;

        let result = match retrieval {
            Ok(Retrieval::Found { bearer, .. }) => {
                self.attach(bearer);
                Ok(self.session_state())
            }
            Ok(Retrieval::Miss(reason)) => {
                info!(?reason, "No session restored");
                self.detach();
                Ok(SessionState::NoBearer)
            }
            Err(error) => {
                warn!(error = %error, code = error.error_code(), "Session retrieval failed");
                self.detach();
                Err(error)
            }
        };

        self.refresh(None);
        result
    }

    /// Handle a menu entry.
    pub fn handle_menu(&mut self, action: MenuAction) -> PresenterResult<()> {
        match action {
            MenuAction::NavigateBack => {
                self.surface.navigate_back();
                Ok(())
            }
            MenuAction::Renew => self.renew().map(|_| ()),
            MenuAction::Revoke => self.revoke().map(|_| ()),
        }
    }

    /// Renew the token in the background.
    pub fn renew(&mut self) -> PresenterResult<TokenAction> {
        self.dispatch(TokenAction::Renew)
    }

    /// Revoke the token in the background.
    pub fn revoke(&mut self) -> PresenterResult<TokenAction> {
        self.dispatch(TokenAction::Revoke)
    }

    fn dispatch(&mut self, action: TokenAction) -> PresenterResult<TokenAction> {
        let bearer = self.bearer.clone().ok_or_else(|| {
            warn!(%action, "Token action without an active session");
            PresenterError::Session(SessionError::NoActiveSession)
        })?;

        if bearer.is_revoked() {
            info!(%action, "Token action refused on revoked token");
            self.surface.show_notice(&self.config.revoked_notice);
            return Err(PresenterError::Session(SessionError::Revoked));
        }

        if let Some(running) = self.in_flight {
            debug!(%action, %running, "Token action refused while another is in flight");
            return Err(PresenterError::Session(SessionError::ActionInFlight {
                action: running,
            }));
        }

        self.in_flight = Some(action);
        info!(%action, auth_type = %bearer.auth_type(), "Token action dispatched");

        let completion_tx = self.completion_tx.clone();
        let clock = self.clock.clone();
        let timestamp_format = self.config.timestamp_format.clone();

        self.worker.spawn(async move {
            let completion =
                complete_action(bearer.as_ref(), action, clock.as_ref(), &timestamp_format).await;

            if completion_tx.send(completion).is_err() {
                debug!(%action, "Presenter dropped before completion");
            }
        });

        Ok(action)
    }

    /// Wait for the in-flight action and apply its completion.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<DisplayState> {
        self.in_flight?;
        let completion = self.completion_rx.recv().await?;
        Some(self.apply_completion(completion))
    }

    /// Apply a completion if one is ready, without waiting.
    pub fn try_next_completion(&mut self) -> Option<DisplayState> {
        let completion = self.completion_rx.try_recv().ok()?;
        Some(self.apply_completion(completion))
    }

    /// Render the completion's status and show the notification.
    ///
    /// The notification is shown only for successful actions unless
    /// `notify_on_failure` is set.
    pub fn apply_completion(&mut self, completion: Completion) -> DisplayState {
        if self.in_flight == Some(completion.action) {
            self.in_flight = None;
        }

        match &completion.error {
            None => info!(action = %completion.action, "Token action completed"),
            Some(error) => warn!(action = %completion.action, error = %error, "Token action failed"),
        }

        let state = self.refresh(Some(&completion.status));

        if completion.is_success() || self.config.notify_on_failure {
            let notification = match completion.action {
                TokenAction::Renew => &self.config.renew_notification,
                TokenAction::Revoke => &self.config.revoke_notification,
            };
            self.surface.notify(notification);
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearer::MockTokenBearer;
    use crate::core::FixedClock;
    use crate::error::BearerError;
    use crate::surface::RecordingSurface;
    use crate::types::AuthType;
    use chrono::{Local, NaiveDateTime, TimeZone};

    fn presenter() -> TokenPresenter<RecordingSurface> {
        TokenPresenter::new(
            PresenterConfig::default(),
            RecordingSurface::new(),
            Arc::new(FixedClock::new(
                Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap(),
            )),
            Handle::current(),
        )
    }

    fn assert_timestamp_suffix(status: &str) {
        let stamp = &status[status.len() - 16..];
        assert!(NaiveDateTime::parse_from_str(stamp, "%d-%m-%Y %H:%M").is_ok());
    }

    #[tokio::test]
    async fn test_initial_state() {
        let mut presenter = presenter();
        assert_eq!(presenter.session_state(), SessionState::NoBearer);

        let state = presenter.refresh(None);
        assert_eq!(state.is_authed_text, "IsAuthed: false");
        assert_eq!(state.auth_type_text, "AuthType: NONE");
        assert!(state.token_fields.is_empty());
        assert!(state.status_message.is_none());
    }

    #[tokio::test]
    async fn test_renew_without_session() {
        let mut presenter = presenter();

        let result = presenter.renew();
        assert!(matches!(
            result,
            Err(PresenterError::Session(SessionError::NoActiveSession))
        ));
        assert!(presenter.revoke().is_err());
        assert!(presenter.surface().events().is_empty());
    }

    #[tokio::test]
    async fn test_renew_success() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::Script));
        presenter.attach(bearer.clone());

        assert_eq!(presenter.renew().unwrap(), TokenAction::Renew);
        assert_eq!(presenter.in_flight(), Some(TokenAction::Renew));

        let state = presenter.next_completion().await.unwrap();
        let status = state.status_message.unwrap();
        assert!(status.starts_with("renewed-access-token-1"));
        assert!(status.contains("Refreshed "));
        assert_eq!(status, "renewed-access-token-1, Refreshed 05-03-2024 14:30");
        assert_timestamp_suffix(&status);

        assert_eq!(bearer.renew_count(), 1);
        assert_eq!(presenter.in_flight(), None);
        assert_eq!(
            presenter.surface().notifications(),
            vec!["Token refreshed successfully"]
        );
    }

    #[tokio::test]
    async fn test_renew_failure_has_no_notification() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::Script));
        bearer.set_next_renew_error(BearerError::Network {
            message: "network down".to_string(),
        });
        presenter.attach(bearer);

        presenter.renew().unwrap();
        let state = presenter.next_completion().await.unwrap();

        assert!(state.status_message.unwrap().contains("network down"));
        assert!(presenter.surface().notifications().is_empty());
        assert_eq!(presenter.session_state(), SessionState::Active);
    }

    #[tokio::test]
    async fn test_notify_on_failure() {
        let mut presenter = presenter();
        presenter.config.notify_on_failure = true;
        let bearer = Arc::new(MockTokenBearer::new(AuthType::Script));
        bearer.set_next_revoke_error(BearerError::RevokeFailed {
            message: "invalid token".to_string(),
        });
        presenter.attach(bearer);

        presenter.revoke().unwrap();
        presenter.next_completion().await.unwrap();

        assert_eq!(
            presenter.surface().notifications(),
            vec!["Token revoked successfully"]
        );
    }

    #[tokio::test]
    async fn test_panicking_bearer_reports_fault() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::Script));
        bearer.set_next_panic("bearer exploded");
        presenter.attach(bearer.clone());

        presenter.renew().unwrap();
        let state = presenter.next_completion().await.unwrap();

        let status = state.status_message.unwrap();
        assert!(status.starts_with("A problem occurred while refreshing the token"));
        assert!(status.contains("bearer exploded"));
        assert!(presenter.surface().notifications().is_empty());
        assert_eq!(presenter.in_flight(), None);

        // The next action goes through.
        presenter.revoke().unwrap();
        presenter.next_completion().await.unwrap();
        assert_eq!(bearer.revoke_count(), 1);
    }

    #[tokio::test]
    async fn test_unformattable_timestamp_still_completes() {
        let mut presenter = presenter();
        presenter.config.timestamp_format = "%Q".to_string();
        presenter.attach(Arc::new(MockTokenBearer::new(AuthType::Script)));

        presenter.renew().unwrap();
        let state = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            presenter.next_completion(),
        )
        .await
        .unwrap()
        .unwrap();

        assert!(state
            .status_message
            .unwrap()
            .starts_with("A problem occurred while refreshing the token"));
        assert_eq!(presenter.in_flight(), None);
        assert!(presenter.renew().is_ok());
    }

    #[tokio::test]
    async fn test_revoked_bearer_shows_notice() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::InstalledApp));
        bearer.set_revoked(true);
        presenter.attach(bearer.clone());

        let result = presenter.renew();
        assert!(result.unwrap_err().is_revoked());
        assert_eq!(bearer.renew_count(), 0);
        assert_eq!(presenter.in_flight(), None);

        let surface = presenter.surface();
        assert_eq!(surface.notices().len(), 1);
        assert_eq!(surface.notices()[0].title, "Action not available!");
        assert!(surface.displays().is_empty());
        assert_eq!(presenter.session_state(), SessionState::Revoked);
    }

    #[tokio::test]
    async fn test_revoke_success() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::InstalledApp));
        presenter.attach(bearer.clone());

        presenter.revoke().unwrap();
        let state = presenter.next_completion().await.unwrap();

        let status = state.status_message.unwrap();
        assert_eq!(status, "Token was revoked 05-03-2024 14:30");
        assert_timestamp_suffix(&status);

        // Revoked state is whatever the bearer reports afterwards.
        assert_eq!(presenter.session_state(), SessionState::Revoked);
        assert!(state.token_fields.is_empty());
        assert_eq!(bearer.revoke_count(), 1);

        // A further action is now refused with the notice.
        assert!(presenter.revoke().unwrap_err().is_revoked());
        assert_eq!(bearer.revoke_count(), 1);
    }

    #[tokio::test]
    async fn test_second_action_refused_while_in_flight() {
        let mut presenter = presenter();
        let bearer = Arc::new(MockTokenBearer::new(AuthType::Script));
        let gate = bearer.hold();
        presenter.attach(bearer.clone());

        presenter.renew().unwrap();
        let result = presenter.revoke();
        assert!(matches!(
            result,
            Err(PresenterError::Session(SessionError::ActionInFlight {
                action: TokenAction::Renew
            }))
        ));
        assert!(presenter.try_next_completion().is_none());

        gate.notify_one();
        presenter.next_completion().await.unwrap();
        assert_eq!(bearer.revoke_count(), 0);
        assert_eq!(presenter.in_flight(), None);
    }

    #[tokio::test]
    async fn test_next_completion_without_action() {
        let mut presenter = presenter();
        assert!(presenter.next_completion().await.is_none());
    }

    #[tokio::test]
    async fn test_menu_actions() {
        let mut presenter = presenter();

        assert!(matches!(
            presenter.handle_menu(MenuAction::Renew),
            Err(PresenterError::Session(SessionError::NoActiveSession))
        ));

        presenter.handle_menu(MenuAction::NavigateBack).unwrap();
        assert_eq!(
            presenter.surface().events(),
            &[crate::surface::SurfaceEvent::NavigatedBack]
        );

        presenter.attach(Arc::new(MockTokenBearer::new(AuthType::Userless)));
        presenter.handle_menu(MenuAction::Revoke).unwrap();
        assert_eq!(presenter.in_flight(), Some(TokenAction::Revoke));
        presenter.next_completion().await.unwrap();
    }

    #[tokio::test]
    async fn test_detach() {
        let mut presenter = presenter();
        presenter.attach(Arc::new(MockTokenBearer::new(AuthType::Userless)));
        assert_eq!(presenter.session_state(), SessionState::Active);

        presenter.detach();
        assert_eq!(presenter.session_state(), SessionState::NoBearer);
        assert!(presenter.bearer().is_none());
    }
}
