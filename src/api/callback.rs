use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

use crate::{
    api::ApiError, error::Error, server::AuthState, spotify, success, types::Credentials, utils,
    warning,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Completes the Authorization Code flow.
///
/// The `state` parameter is checked before anything else; a mismatch aborts
/// the request without contacting the token endpoint or touching the
/// credential file. On success the page echoes the code, state and both
/// tokens, which is meant for local debugging only.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AuthState>>,
) -> Result<Html<String>, ApiError> {
    if !utils::state_matches(&state.nonce, params.state.as_deref()) {
        warning!("Rejected callback with mismatched state");
        return Err(Error::StateMismatch.into());
    }

    if let Some(reason) = params.error {
        return Err(Error::AuthorizationDenied(reason).into());
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(ApiError::bad_request("Missing authorization code."));
    };

    let token = spotify::auth::exchange_code(&state.http, &state.config, &code).await?;
    let credentials = Credentials {
        access_token: token.access_token,
        refresh_token: token.refresh_token.unwrap_or_default(),
    };

    state.store.persist(&credentials).await?;
    success!(
        "Credentials written to {} (access token {})",
        state.store.path().display(),
        utils::mask_token(&credentials.access_token)
    );

    let page = render_confirmation(&code, &state.nonce, &credentials);
    state.complete(credentials).await;
    Ok(Html(page))
}

fn render_confirmation(code: &str, nonce: &str, credentials: &Credentials) -> String {
    format!(
        "<h2>Authentication successful.</h2>\
         <p>authorization code: {}</p>\
         <p>state: {}</p>\
         <p>access_token: {}</p>\
         <p>refresh_token: {}</p>\
         <p>Close browser window.</p>",
        escape_html(code),
        escape_html(nonce),
        escape_html(&credentials.access_token),
        escape_html(&credentials.refresh_token),
    )
}

pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
