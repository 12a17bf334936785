//! # CLI Module
//!
//! Command implementations behind the `spotlist` binary. Each command loads
//! what it needs from the [`Config`], calls into the [`crate::spotify`]
//! layer and reports the outcome with the crate's console macros. This is the
//! only layer that terminates the process on failure.
//!
//! ## Commands
//!
//! - [`auth`] - runs the local authorization server and stores the credentials
//! - [`me`] - prints the current user's profile
//! - [`playlists`] - lists a user's playlists and writes them to a JSON file
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotlist auth                          # Authorize once, writes the credential file
//! spotlist me                            # Show the current user
//! spotlist playlists                     # Playlists of the current user
//! spotlist playlists --user-id someone --output data/someone.json
//! ```

mod auth;
mod me;
mod playlists;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, spotify::client::SpotifyClient};

pub use auth::auth;
pub use me::me;
pub use playlists::playlists;

async fn load_client(config: &Config) -> SpotifyClient {
    match SpotifyClient::load(config).await {
        Ok(client) => client,
        Err(e) => error!(
            "Failed to load credentials from {}. Please run spotlist auth\n Error: {}",
            config.credentials_path.display(),
            e
        ),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
