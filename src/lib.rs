//! Spotlist Library
//!
//! This library authorizes a single user against the Spotify Web API with the
//! OAuth 2.0 Authorization Code flow, keeps the resulting credentials in a flat
//! JSON file and issues authenticated requests that refresh the access token
//! and back off on rate limiting.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local authorization server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded from environment variables and `.env` files
//! - `error` - Error type shared by the library
//! - `management` - Credential file persistence
//! - `server` - Local HTTP server for the authorization bootstrap
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotlist::{config, spotify::client::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotlist::error::Result<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let mut client = SpotifyClient::load(&config).await?;
//!     let me = client.fetch_current_user().await?;
//!     println!("{}", me.id);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Starting authorization server...");
/// info!("Fetched {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only the command-line layer uses
/// it; library functions return errors and let the caller decide.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed token refresh or a rate
/// limited request that is about to be replayed.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
