//! Token info screen on the terminal.
//!
//! Restores a session from in-memory storage, then renews and revokes it.
//!
//! Run:
//! cargo run --example token_info

use std::sync::Arc;

use token_presenter::{
    app_credentials, get_user_message, presenter_config, token_presenter, AppCredentialProvider,
    AuthType, BearerError, ConsoleSurface, InMemoryTokenStorage, LogLevel, LoggingConfig,
    MenuAction, MockBearerFactory, MockTokenBearer, SavedSession, TokenBearer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    LoggingConfig::new().with_level(LogLevel::Info).init()?;

    let config = presenter_config().storage_key("demo_session").build()?;
    let credentials = app_credentials()
        .client_id("demo-client")
        .redirect_url("http://127.0.0.1:8080/callback")
        .build()?;
    let provider = AppCredentialProvider::new(credentials);

    let session = SavedSession::new(
        Arc::new(InMemoryTokenStorage::new()),
        Arc::new(MockBearerFactory::new()),
        config.storage_key.clone(),
    );
    session
        .save(&MockTokenBearer::new(AuthType::InstalledApp))
        .await?;

    let mut presenter = token_presenter()
        .config(config)
        .build(ConsoleSurface::new())?;
    presenter.load_session(&session, &provider).await?;

    presenter.handle_menu(MenuAction::Renew)?;
    presenter.next_completion().await;

    // A renew that fails shows the fault without a notification.
    if let Some(bearer) = presenter.bearer().cloned() {
        let failing = MockTokenBearer::with_token(bearer.auth_type(), bearer.token());
        failing.set_next_renew_error(BearerError::Network {
            message: "network down".to_string(),
        });
        presenter.attach(Arc::new(failing));
    }
    presenter.handle_menu(MenuAction::Renew)?;
    presenter.next_completion().await;

    presenter.handle_menu(MenuAction::Revoke)?;
    presenter.next_completion().await;

    if let Err(error) = presenter.handle_menu(MenuAction::Renew) {
        println!("{}", get_user_message(&error));
    }

    presenter.handle_menu(MenuAction::NavigateBack)?;
    println!("closed: {}", presenter.surface().is_closed());
    Ok(())
}
