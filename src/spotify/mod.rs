//! # Spotify Integration Module
//!
//! Integration layer between Spotlist and the Spotify Web API.
//!
//! ```text
//! CLI Layer
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (Authorization Code flow, token endpoint)
//!     ├── Client (authenticated calls, refresh, rate-limit backoff)
//!     ├── User (current profile)
//!     └── Playlists (paginated listing, JSON export)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] runs the local bootstrapper and talks to the token endpoint with
//! HTTP Basic client authentication for both the `authorization_code` and
//! the `refresh_token` grants.
//!
//! ## Authenticated Requests
//!
//! [`client::SpotifyClient`] owns the credentials and a consecutive-error
//! counter. Each call runs in a bounded loop: a `401` refreshes the access
//! token and replays, a `429` sleeps for a fixed interval and replays, and
//! ten consecutive non-200 responses end in
//! [`Error::ErrorBudgetExceeded`](crate::error::Error::ErrorBudgetExceeded).
//!
//! ## Endpoints
//!
//! - [`SpotifyClient::fetch_current_user`](client::SpotifyClient::fetch_current_user) - `GET /me`
//! - [`SpotifyClient::fetch_user_playlists`](client::SpotifyClient::fetch_user_playlists) -
//!   `GET /users/{id}/playlists` and every `next` page

pub mod auth;
pub mod client;
pub mod playlists;
pub mod user;
