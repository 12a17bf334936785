use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the authorization bootstrapper and the API client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State mismatch during authorization")]
    StateMismatch,

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("No authorization callback received within {:.1}s", .0.as_secs_f32())]
    AuthorizationTimeout(Duration),

    #[error("Token endpoint responded with {status}: {body}")]
    TokenEndpoint { status: StatusCode, body: String },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },

    #[error("Too many consecutive errors ({attempts}). Giving up.")]
    ErrorBudgetExceeded { attempts: u32 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
