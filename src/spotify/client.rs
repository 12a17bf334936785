use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    management::CredentialStore,
    spotify::auth,
    success,
    types::{ApiRequest, Credentials},
    warning,
};

/// Consecutive non-200 responses after which the client gives up.
pub const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Fixed delay before replaying a rate limited request.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(10);

/// Authenticated session against the Spotify Web API.
///
/// Holds the current credentials, the client configuration and the
/// consecutive-error counter that is shared by every call made through
/// [`SpotifyClient::authenticated_call`]. Calls are issued one at a time.
pub struct SpotifyClient {
    http: Client,
    config: Config,
    store: CredentialStore,
    credentials: Credentials,
    consecutive_errors: u32,
    max_consecutive_errors: u32,
    backoff: Duration,
    last_request: Option<ApiRequest>,
}

impl SpotifyClient {
    /// Creates a client from the credential file named in `config`.
    pub async fn load(config: &Config) -> Result<Self> {
        let store = CredentialStore::new(&config.credentials_path);
        Self::with_store(config.clone(), store).await
    }

    pub async fn with_store(config: Config, store: CredentialStore) -> Result<Self> {
        let credentials = store.load().await?;
        Ok(Self {
            http: Client::new(),
            config,
            store,
            credentials,
            consecutive_errors: 0,
            max_consecutive_errors: MAX_CONSECUTIVE_ERRORS,
            backoff: RATE_LIMIT_BACKOFF,
            last_request: None,
        })
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_max_consecutive_errors(mut self, max: u32) -> Self {
        self.max_consecutive_errors = max;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    pub fn last_request(&self) -> Option<&ApiRequest> {
        self.last_request.as_ref()
    }

    /// Joins path segments onto the configured API base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.config.api_url).map_err(|e| {
            Error::Config(format!("Invalid API URL '{}': {}", self.config.api_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API URL '{}' cannot be a base", self.config.api_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url.into())
    }

    /// Issues `request` with the current bearer token and handles the response.
    ///
    /// - `200`: the consecutive-error counter is reset and the response returned.
    /// - `401`: the access token is refreshed and the request replayed.
    /// - `429`: the client sleeps for the backoff interval and replays the
    ///   request with the unchanged token.
    /// - anything else: the response is returned to the caller as is.
    ///
    /// Every non-200 response counts against the error budget. Once the
    /// counter reaches the limit [`Error::ErrorBudgetExceeded`] is returned and
    /// no further request is sent; the counter is not reset, so later calls
    /// fail the same way until a new client is created.
    pub async fn authenticated_call(&mut self, request: ApiRequest) -> Result<Response> {
        self.last_request = Some(request.clone());

        loop {
            if self.consecutive_errors >= self.max_consecutive_errors {
                return Err(Error::ErrorBudgetExceeded {
                    attempts: self.consecutive_errors,
                });
            }

            let response = self.send(&request).await?;
            let status = response.status();

            if status == StatusCode::OK {
                self.consecutive_errors = 0;
                return Ok(response);
            }

            self.consecutive_errors += 1;
            warning!(
                "HTTP {} from {} ({}/{} consecutive errors)",
                status,
                request.url,
                self.consecutive_errors,
                self.max_consecutive_errors
            );

            if self.consecutive_errors >= self.max_consecutive_errors {
                return Err(Error::ErrorBudgetExceeded {
                    attempts: self.consecutive_errors,
                });
            }

            match status {
                StatusCode::UNAUTHORIZED => {
                    info!("Refreshing access token...");
                    self.refresh_access_token().await?;
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    info!("Backing off requests for {}s...", self.backoff.as_secs_f32());
                    sleep(self.backoff).await;
                }
                _ => return Ok(response),
            }
        }
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// On success the new access token, together with the carried-over (or
    /// rotated) refresh token, is written to the credential file and the
    /// client reloads its credentials from disk. A non-200 answer from the
    /// token endpoint is only logged and `Ok(false)` returned, leaving the
    /// stale token in place.
    pub async fn refresh_access_token(&mut self) -> Result<bool> {
        let token =
            match auth::refresh_token(&self.http, &self.config, &self.credentials.refresh_token)
                .await
            {
                Ok(token) => token,
                Err(Error::TokenEndpoint { status, body }) => {
                    warning!("Token refresh failed with {}: {}", status, body);
                    return Ok(false);
                }
                Err(e) => return Err(e),
            };

        let refreshed = Credentials {
            access_token: token.access_token,
            refresh_token: token
                .refresh_token
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| self.credentials.refresh_token.clone()),
        };

        self.store.persist(&refreshed).await?;
        self.credentials = self.store.load().await?;
        success!("Access token refreshed.");
        Ok(true)
    }

    async fn send(&self, request: &ApiRequest) -> Result<Response> {
        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .bearer_auth(&self.credentials.access_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        Ok(builder.send().await?)
    }
}

/// Turns a non-200 response handed back by `authenticated_call` into an error.
pub(crate) fn ensure_ok(response: Response) -> Result<Response> {
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::UnexpectedStatus {
            status,
            url: response.url().to_string(),
        });
    }
    Ok(response)
}
