use std::sync::Arc;

use axum::{Extension, extract::Query, http::StatusCode, response::Json};

use crate::{
    Res,
    config::ClientConfig,
    info,
    spotify::SpotifyClient,
    success,
    types::{CallbackQuery, CleanupSummary, StatusResponse},
    warning,
};

/// Generic failure message. Callers never see which step failed.
const CLEANUP_FAILED: &str = "An error occurred while cleaning Spotify account.";

/// `GET /callback` - receives the OAuth callback and cleans the account.
///
/// This is the single error boundary of the cleanup: any failure inside
/// [`clean_account`] - code exchange, any fetch, any removal - is logged
/// with full detail and mapped to one generic 500 response.
pub async fn callback(
    Query(query): Query<CallbackQuery>,
    Extension(config): Extension<Arc<ClientConfig>>,
) -> (StatusCode, Json<StatusResponse>) {
    // An absent code is handed to the exchange as-is; Spotify rejects it
    // there and the failure lands in the boundary below.
    let code = query.code.unwrap_or_default();

    match clean_account(config, &code).await {
        Ok(summary) => {
            let message = summary.message();
            success!("{}", message);
            (StatusCode::OK, Json(StatusResponse { status: message }))
        }
        Err(e) => {
            warning!("Account cleanup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    status: CLEANUP_FAILED.to_string(),
                }),
            )
        }
    }
}

/// Runs the full cleanup sequence for one authorization code.
///
/// Exchanges the code for an access token, snapshots the five saved
/// collections in sequence, then removes every non-empty one. Counts are
/// taken from the snapshots before removal, so the summary reflects what
/// was found even if Spotify drops individual ids silently.
///
/// Every network call is awaited before the next starts; nothing here runs
/// concurrently. A fresh client per invocation keeps one user's token out
/// of another user's in-flight calls.
///
/// # Errors
///
/// Returns the first failure and issues no further upstream calls. A
/// failure before the removals leaves the account untouched; a failure
/// between removals leaves the categories already processed removed, with
/// no rollback.
pub async fn clean_account(config: Arc<ClientConfig>, code: &str) -> Res<CleanupSummary> {
    info!("Starting account cleanup");

    let mut spotify = SpotifyClient::new(config);
    spotify.exchange_code(code).await?;

    let albums = spotify.saved_albums().await?;
    let artists = spotify.followed_artists().await?;
    let shows = spotify.saved_shows().await?;
    let tracks = spotify.saved_tracks().await?;
    let playlists = spotify.playlists().await?;

    if !albums.is_empty() {
        let ids: Vec<&str> = albums.iter().map(|a| a.album_id()).collect();
        spotify.remove_saved_albums(&ids).await?;
    }
    if !artists.is_empty() {
        let ids: Vec<&str> = artists.iter().map(|a| a.id.as_str()).collect();
        spotify.unfollow_artists(&ids).await?;
    }
    if !shows.is_empty() {
        let ids: Vec<&str> = shows.iter().map(|s| s.show_id()).collect();
        spotify.remove_saved_shows(&ids).await?;
    }
    if !tracks.is_empty() {
        let ids: Vec<&str> = tracks.iter().map(|t| t.track_id()).collect();
        spotify.remove_saved_tracks(&ids).await?;
    }

    // No bulk unfollow exists for playlists; one call each.
    for playlist in &playlists {
        spotify.unfollow_playlist(&playlist.id).await?;
    }

    Ok(CleanupSummary {
        albums: albums.len(),
        artists: artists.len(),
        shows: shows.len(),
        tracks: tracks.len(),
        playlists: playlists.len(),
    })
}
