use std::{sync::Arc, time::Duration};

use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use tokio::{net::TcpListener, sync::oneshot};

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    management::CredentialStore,
    server::{self, AuthState},
    success,
    types::{Credentials, TokenResponse},
    utils, warning,
};

/// Runs the authorization bootstrapper until the first successful callback.
///
/// Binds the local server on the configured address, opens the operator's
/// browser at the server root (which redirects to Spotify) and waits for the
/// callback to exchange the code and write the credential file.
///
/// # Errors
///
/// - [`Error::Io`] if the server address cannot be bound
/// - [`Error::AuthorizationTimeout`] if no successful callback arrives in time
pub async fn auth(config: &Config, timeout: Duration) -> Result<Credentials> {
    let listener = TcpListener::bind(config.server_addr).await?;
    let local_url = format!("http://{}/", listener.local_addr()?);

    info!("Authorization server listening on {}", local_url);
    if webbrowser::open(&local_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            local_url
        )
    }

    run(listener, config, timeout).await
}

/// Serves the bootstrapper routes on `listener` for one authorization run.
///
/// The server is shut down once the credentials are written or the timeout
/// elapses, and has stopped accepting connections when this returns.
pub async fn run(
    listener: TcpListener,
    config: &Config,
    timeout: Duration,
) -> Result<Credentials> {
    let (completed_tx, completed_rx) = oneshot::channel();
    let state = Arc::new(AuthState::new(
        config.clone(),
        CredentialStore::new(&config.credentials_path),
        utils::generate_state_nonce(),
        completed_tx,
    ));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(server::serve(listener, state, async move {
        let _ = shutdown_rx.await;
    }));

    let outcome = tokio::time::timeout(timeout, completed_rx).await;

    let _ = shutdown_tx.send(());
    match server.await {
        Ok(Err(e)) => warning!("Authorization server stopped with an error: {}", e),
        Err(e) => warning!("Authorization server task failed: {}", e),
        Ok(Ok(())) => {}
    }

    match outcome {
        Ok(Ok(credentials)) => {
            success!("Authorization successful!");
            Ok(credentials)
        }
        _ => Err(Error::AuthorizationTimeout(timeout)),
    }
}

/// Exchanges an authorization code for an access/refresh token pair.
pub async fn exchange_code(http: &Client, config: &Config, code: &str) -> Result<TokenResponse> {
    let token = request_token(
        http,
        config,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ],
    )
    .await?;

    if token.refresh_token.as_deref().is_none_or(str::is_empty) {
        return Err(Error::InvalidCredentials(
            "token response did not contain a refresh_token".to_string(),
        ));
    }

    Ok(token)
}

/// Requests a new access token with the stored refresh token.
///
/// The response may or may not carry a rotated refresh token; callers carry
/// the previous one forward when it does not.
pub async fn refresh_token(
    http: &Client,
    config: &Config,
    refresh_token: &str,
) -> Result<TokenResponse> {
    request_token(
        http,
        config,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await
}

async fn request_token(
    http: &Client,
    config: &Config,
    form: &[(&str, &str)],
) -> Result<TokenResponse> {
    let res = http
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(form)
        .send()
        .await?;

    let status = res.status();
    info!("Token endpoint responded with {}", status);

    if status != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::TokenEndpoint { status, body });
    }

    let token: TokenResponse = res.json().await?;
    if token.access_token.is_empty() {
        return Err(Error::TokenEndpoint {
            status,
            body: "response did not contain an access_token".to_string(),
        });
    }

    Ok(token)
}
