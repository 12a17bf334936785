use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
    types::{Playlist, PlaylistTableRow},
};

pub const STATE_NONCE_LEN: usize = 64;

/// Generates the opaque `state` value round-tripped through the authorize redirect.
pub fn generate_state_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Builds the value of an HTTP Basic `Authorization` header from the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Builds the URL the operator's browser is redirected to.
///
/// Query values are percent-encoded, so the space-delimited scope list and
/// the redirect URI survive the round trip.
pub fn build_authorize_url(config: &Config, state: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("response_type", "code"),
            ("client_id", config.client_id.as_str()),
            ("scope", config.scope.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Config(format!("Invalid authorize URL '{}': {}", config.auth_url, e)))?;

    Ok(url.into())
}

/// Compares the callback `state` with the issued nonce without short-circuiting.
pub fn state_matches(expected: &str, received: Option<&str>) -> bool {
    let Some(received) = received else {
        return false;
    };

    if expected.len() != received.len() {
        return false;
    }

    expected
        .bytes()
        .zip(received.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

pub fn playlist_table_rows(playlists: &[Playlist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .map(|p| PlaylistTableRow {
            name: p.name.clone(),
            id: p.id.clone(),
            owner: p
                .owner
                .as_ref()
                .map(|o| o.display_name.clone().unwrap_or_else(|| o.id.clone()))
                .unwrap_or_default(),
            tracks: p
                .tracks
                .as_ref()
                .map(|t| t.total.to_string())
                .unwrap_or_else(|| "-".to_string()),
            visibility: match (p.collaborative, p.public) {
                (true, _) => "collaborative".to_string(),
                (false, Some(true)) => "public".to_string(),
                (false, Some(false)) => "private".to_string(),
                (false, None) => "-".to_string(),
            },
        })
        .collect()
}

/// Masks a token for console output, keeping only its first and last characters.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
