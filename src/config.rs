//! Configuration management for Spotlist.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. Everything the authorization bootstrapper and the API
//! client need is collected once into a [`Config`] value which is then passed
//! explicitly to the code that needs it.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::error::{Error, Result};

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative playlist-modify-private playlist-modify-public user-library-read user-library-modify user-read-private user-read-email";
pub const DEFAULT_PLAYLISTS_OUTPUT: &str = "data/v1_my_playlists.json";

/// Loads environment variables from `.env` files.
///
/// The file in the platform-specific local data directory
/// (`~/.local/share/spotlist/.env` on Linux) is read first, followed by a
/// `.env` in the current working directory. Variables that are already set
/// in the process environment are never overwritten. Missing files are not
/// an error.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use spotlist::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<()> {
    if let Ok(path) = dotenv::dotenv() {
        crate::info!("Loaded environment from {}", path.display());
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

/// Returns the directory holding the `.env` file and the default credential file.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlist");
    path
}

/// Runtime configuration shared by the bootstrapper and the API client.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: SocketAddr,
    pub user_id: Option<String>,
    pub credentials_path: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are required; a missing
    /// or blank value is reported as [`Error::Config`] rather than carried as
    /// an empty credential. All other values fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let server_addr = optional("SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_addr = SocketAddr::from_str(&server_addr).map_err(|e| {
            Error::Config(format!("Invalid SERVER_ADDRESS '{}': {}", server_addr, e))
        })?;

        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: optional("SPOTIFY_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            scope: optional("SPOTIFY_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: optional("SPOTIFY_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            token_url: optional("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_addr,
            user_id: optional("SPOTIFY_USER_ID"),
            credentials_path: optional("SPOTLIST_CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir().join("secrets.json")),
        })
    }
}

fn required(key: &str) -> Result<String> {
    optional(key).ok_or_else(|| Error::Config(format!("{} must be set", key)))
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
