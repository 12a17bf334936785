use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{error::Error, warning};

/// Error returned by the bootstrapper handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::StateMismatch | Error::AuthorizationDenied(_) => StatusCode::BAD_REQUEST,
            Error::TokenEndpoint { .. } | Error::Http(_) | Error::InvalidCredentials(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warning!("Authorization request failed ({}): {}", self.status, self.message);
        let body = format!(
            "<h2>Login failed.</h2><h4>{}</h4>",
            super::callback::escape_html(&self.message)
        );
        (self.status, Html(body)).into_response()
    }
}
