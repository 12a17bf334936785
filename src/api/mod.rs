//! # API Module
//!
//! HTTP endpoints of the local authorization server started by `spotlist auth`.
//!
//! ## Endpoints
//!
//! - [`authorize`] - `GET /` redirects the browser to Spotify's authorize URL,
//!   carrying the per-run `state` nonce.
//! - [`callback`] - `GET /callback` validates `state`, exchanges the
//!   authorization code for tokens and writes the credential file.
//! - [`health`] - `GET /health` reports status and version.
//!
//! Handler failures are rendered through [`ApiError`], which maps the
//! library [`Error`](crate::error::Error) onto an HTTP status and a short
//! HTML message.

mod authorize;
mod callback;
mod error;
mod health;

pub use authorize::authorize;
pub use callback::callback;
pub use error::ApiError;
pub use health::health;
