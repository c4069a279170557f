//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! account cleaner: the OAuth authorization-code exchange, the five saved
//! library fetches, and the matching removal/unfollow operations.
//!
//! ## Architecture
//!
//! All operations hang off [`SpotifyClient`], a request-scoped handle that
//! carries the immutable client configuration plus the access token obtained
//! from the code exchange. Every callback request constructs its own client
//! so that one user's token can never leak into another user's in-flight
//! calls when two authorizations run concurrently.
//!
//! The submodules split the client by API domain:
//!
//! - [`client`] - Handle construction and the authorization URL
//! - [`auth`] - Authorization-code token exchange
//! - [`library`] - Saved albums, shows, and tracks (fetch and remove)
//! - [`artists`] - Followed artists (fetch and unfollow)
//! - [`playlists`] - User playlists (fetch and per-playlist unfollow)
//!
//! ## API Coverage
//!
//! - `POST <token_url>` - Authorization-code grant
//! - `GET /me/albums`, `DELETE /me/albums`
//! - `GET /me/following?type=artist`, `DELETE /me/following?type=artist`
//! - `GET /me/shows`, `DELETE /me/shows`
//! - `GET /me/tracks`, `DELETE /me/tracks`
//! - `GET /me/playlists`, `DELETE /playlists/{id}/followers`
//!
//! Fetches request a single page of up to 50 items; the cleanup does not
//! continue pagination.
//!
//! ## Error Handling
//!
//! All fallible operations return [`crate::Res`], so HTTP transport errors,
//! non-success upstream statuses, and a missing access token flow through
//! one error channel that the callback handler maps to its generic failure
//! response.

mod artists;
mod auth;
mod client;
mod library;
mod playlists;

pub use client::SpotifyClient;
