use std::{future::Future, sync::Arc};

use axum::{Extension, Router, routing::get};
use reqwest::Client;
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};

use crate::{api, config::Config, error::Result, management::CredentialStore, types::Credentials};

/// State shared by the bootstrapper routes for the lifetime of one run.
pub struct AuthState {
    pub config: Config,
    pub store: CredentialStore,
    pub nonce: String,
    pub http: Client,
    completed: Mutex<Option<oneshot::Sender<Credentials>>>,
}

impl AuthState {
    pub fn new(
        config: Config,
        store: CredentialStore,
        nonce: String,
        completed: oneshot::Sender<Credentials>,
    ) -> Self {
        Self {
            config,
            store,
            nonce,
            http: Client::new(),
            completed: Mutex::new(Some(completed)),
        }
    }

    /// Whether the run is still waiting for a successful callback.
    pub async fn is_pending(&self) -> bool {
        self.completed.lock().await.is_some()
    }

    /// Signals the waiting bootstrapper that credentials were written.
    pub async fn complete(&self, credentials: Credentials) {
        if let Some(tx) = self.completed.lock().await.take() {
            let _ = tx.send(credentials);
        }
    }
}

pub fn router(state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

pub async fn serve<F>(listener: TcpListener, state: Arc<AuthState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
