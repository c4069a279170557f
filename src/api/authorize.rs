use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
};

use crate::{config::ClientConfig, spotify::SpotifyClient, types::CallbackQuery};

/// Scopes requested from every user. The cleanup touches the library,
/// follows, and playlists, so the set is broad.
const SCOPES: [&str; 12] = [
    "user-read-private",
    "user-follow-modify",
    "user-follow-read",
    "user-library-modify",
    "user-library-read",
    "user-read-playback-position",
    "user-top-read",
    "user-read-recently-played",
    "playlist-modify-private",
    "playlist-read-collaborative",
    "playlist-read-private",
    "playlist-modify-public",
];

/// State value echoed back by Spotify on the callback. Constant; the
/// callback does not verify it.
const AUTH_STATE: &str = "hi";

/// `GET /` - redirects the browser to Spotify's authorization page.
///
/// Query input is accepted by the shared schema but ignored here.
pub async fn authorize(
    Query(_query): Query<CallbackQuery>,
    Extension(config): Extension<Arc<ClientConfig>>,
) -> (StatusCode, [(header::HeaderName, String); 1]) {
    let auth_url = SpotifyClient::new(config).authorize_url(&SCOPES, AUTH_STATE);

    (StatusCode::FOUND, [(header::LOCATION, auth_url)])
}
