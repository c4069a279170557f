//! # API Module
//!
//! This module provides the HTTP endpoints of the account cleaner.
//!
//! ## Endpoints
//!
//! - [`authorize`] - Redirects the browser into Spotify's OAuth consent
//!   page with the full set of scopes the cleanup needs.
//! - [`callback`] - Receives the OAuth callback from Spotify, exchanges the
//!   authorization code for an access token, and removes everything the
//!   user has saved or followed, reporting per-category counts.
//! - [`health`] - Health check returning application status and version.
//!
//! ## Architecture
//!
//! Handlers are async functions wired into the Axum router built by
//! [`crate::server`]. The shared [`crate::config::ClientConfig`] reaches
//! them through an `Extension` layer; each callback request builds its own
//! [`crate::spotify::SpotifyClient`] on top of it.
//!
//! ## Error Behavior
//!
//! The callback is the only fallible route. Any failure inside the cleanup
//! sequence is logged server-side and collapsed into a single generic
//! 500 response; callers never see per-step detail.

mod authorize;
mod callback;
mod health;

pub use authorize::authorize;
pub use callback::{callback, clean_account};
pub use health::health;
