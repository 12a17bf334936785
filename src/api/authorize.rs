use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
};

use crate::{api::ApiError, info, server::AuthState, utils};

/// Redirects the browser to Spotify's authorize endpoint with `302 Found`.
pub async fn authorize(
    Extension(state): Extension<Arc<AuthState>>,
) -> Result<impl IntoResponse, ApiError> {
    let url = utils::build_authorize_url(&state.config, &state.nonce)?;
    info!("Redirecting to authorization server");
    Ok((StatusCode::FOUND, [(LOCATION, url)]))
}
