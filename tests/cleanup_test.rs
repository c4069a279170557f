// Cleanup orchestration tests against a stub Spotify service bound to an
// ephemeral local port. The stub records every call it receives, so the
// tests can assert exactly which upstream operations ran and in what order.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use spotify_cleaner::{api::clean_account, config::ClientConfig, types::CleanupSummary};

/// Stub Spotify service: serves a fixed library and records calls.
#[derive(Clone, Default)]
struct Stub {
    calls: Arc<Mutex<Vec<String>>>,
    albums: usize,
    artists: usize,
    shows: usize,
    tracks: usize,
    playlists: usize,
    fail_exchange: bool,
    fail_artists_fetch: bool,
}

impl Stub {
    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

fn wrapped_items(count: usize, wrapper: &str, prefix: &str) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let mut entry = serde_json::Map::new();
            entry.insert(
                wrapper.to_string(),
                json!({ "id": format!("{prefix}{i}"), "name": format!("{prefix} {i}") }),
            );
            Value::Object(entry)
        })
        .collect()
}

fn flat_items(count: usize, prefix: &str) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "id": format!("{prefix}{i}"), "name": format!("{prefix} {i}") }))
        .collect()
}

async fn token(State(stub): State<Stub>) -> (StatusCode, Json<Value>) {
    stub.record("POST /api/token".to_string()).await;
    if stub.fail_exchange {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": "stub-access-token",
            "token_type": "Bearer",
            "scope": "",
            "expires_in": 3600
        })),
    )
}

async fn saved_albums(State(stub): State<Stub>) -> Json<Value> {
    stub.record("GET /me/albums".to_string()).await;
    Json(json!({ "items": wrapped_items(stub.albums, "album", "album") }))
}

async fn remove_albums(State(stub): State<Stub>, Json(body): Json<Value>) -> StatusCode {
    let ids = body["ids"].as_array().map(|a| a.len()).unwrap_or(0);
    stub.record(format!("DELETE /me/albums ids={ids}")).await;
    StatusCode::OK
}

async fn followed_artists(State(stub): State<Stub>) -> (StatusCode, Json<Value>) {
    stub.record("GET /me/following".to_string()).await;
    if stub.fail_artists_fetch {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "server error" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "artists": { "items": flat_items(stub.artists, "artist") } })),
    )
}

async fn unfollow_artists(
    State(stub): State<Stub>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> StatusCode {
    let ids = params
        .get("ids")
        .map(|ids| ids.split(',').count())
        .unwrap_or(0);
    stub.record(format!("DELETE /me/following ids={ids}")).await;
    StatusCode::OK
}

async fn saved_shows(State(stub): State<Stub>) -> Json<Value> {
    stub.record("GET /me/shows".to_string()).await;
    Json(json!({ "items": wrapped_items(stub.shows, "show", "show") }))
}

async fn remove_shows(
    State(stub): State<Stub>,
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> StatusCode {
    let ids = params
        .get("ids")
        .map(|ids| ids.split(',').count())
        .unwrap_or(0);
    stub.record(format!("DELETE /me/shows ids={ids}")).await;
    StatusCode::OK
}

async fn saved_tracks(State(stub): State<Stub>) -> Json<Value> {
    stub.record("GET /me/tracks".to_string()).await;
    Json(json!({ "items": wrapped_items(stub.tracks, "track", "track") }))
}

async fn remove_tracks(State(stub): State<Stub>, Json(body): Json<Value>) -> StatusCode {
    let ids = body["ids"].as_array().map(|a| a.len()).unwrap_or(0);
    stub.record(format!("DELETE /me/tracks ids={ids}")).await;
    StatusCode::OK
}

async fn playlists(State(stub): State<Stub>) -> Json<Value> {
    stub.record("GET /me/playlists".to_string()).await;
    Json(json!({ "items": flat_items(stub.playlists, "playlist") }))
}

async fn unfollow_playlist(State(stub): State<Stub>, Path(id): Path<String>) -> StatusCode {
    stub.record(format!("DELETE /playlists/{id}/followers")).await;
    StatusCode::OK
}

async fn start_stub(stub: Stub) -> SocketAddr {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/me/albums", get(saved_albums).delete(remove_albums))
        .route("/me/following", get(followed_artists).delete(unfollow_artists))
        .route("/me/shows", get(saved_shows).delete(remove_shows))
        .route("/me/tracks", get(saved_tracks).delete(remove_tracks))
        .route("/me/playlists", get(playlists))
        .route("/playlists/{id}/followers", delete(unfollow_playlist))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn stub_config(addr: SocketAddr) -> Arc<ClientConfig> {
    let base = format!("http://{addr}");
    Arc::new(ClientConfig {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "http://localhost:8080/callback".to_string(),
        auth_url: format!("{base}/authorize"),
        token_url: format!("{base}/api/token"),
        api_url: base,
    })
}

#[tokio::test]
async fn cleans_mixed_library_and_skips_empty_categories() {
    let stub = Stub {
        albums: 3,
        artists: 0,
        shows: 1,
        tracks: 5,
        playlists: 2,
        ..Stub::default()
    };
    let addr = start_stub(stub.clone()).await;

    let summary = clean_account(stub_config(addr), "valid-code").await.unwrap();

    // Counts come from the snapshot lengths
    assert_eq!(
        summary,
        CleanupSummary {
            albums: 3,
            artists: 0,
            shows: 1,
            tracks: 5,
            playlists: 2,
        }
    );
    assert_eq!(
        summary.message(),
        "Spotify account cleaned! Removed: 3 albums, 0 artists, 1 shows, 5 tracks, 2 playlists."
    );

    // Strictly sequential: exchange, five fetches, then removals for the
    // non-empty categories only. No unfollow-artists call for the empty
    // artists category, and one unfollow call per playlist.
    assert_eq!(
        stub.calls().await,
        vec![
            "POST /api/token",
            "GET /me/albums",
            "GET /me/following",
            "GET /me/shows",
            "GET /me/tracks",
            "GET /me/playlists",
            "DELETE /me/albums ids=3",
            "DELETE /me/shows ids=1",
            "DELETE /me/tracks ids=5",
            "DELETE /playlists/playlist0/followers",
            "DELETE /playlists/playlist1/followers",
        ]
    );
}

#[tokio::test]
async fn empty_library_issues_no_removal_calls() {
    let stub = Stub::default();
    let addr = start_stub(stub.clone()).await;

    let summary = clean_account(stub_config(addr), "valid-code").await.unwrap();

    assert_eq!(
        summary,
        CleanupSummary {
            albums: 0,
            artists: 0,
            shows: 0,
            tracks: 0,
            playlists: 0,
        }
    );
    assert_eq!(
        summary.message(),
        "Spotify account cleaned! Removed: 0 albums, 0 artists, 0 shows, 0 tracks, 0 playlists."
    );

    // All five fetches ran, nothing was removed
    assert_eq!(
        stub.calls().await,
        vec![
            "POST /api/token",
            "GET /me/albums",
            "GET /me/following",
            "GET /me/shows",
            "GET /me/tracks",
            "GET /me/playlists",
        ]
    );
}

#[tokio::test]
async fn failed_exchange_stops_before_any_fetch() {
    let stub = Stub {
        albums: 4,
        fail_exchange: true,
        ..Stub::default()
    };
    let addr = start_stub(stub.clone()).await;

    let result = clean_account(stub_config(addr), "rejected-code").await;

    assert!(result.is_err());
    // The sequence aborted at the exchange; no library call was issued
    assert_eq!(stub.calls().await, vec!["POST /api/token"]);
}

#[tokio::test]
async fn failed_fetch_aborts_before_any_removal() {
    let stub = Stub {
        albums: 2,
        fail_artists_fetch: true,
        ..Stub::default()
    };
    let addr = start_stub(stub.clone()).await;

    let result = clean_account(stub_config(addr), "valid-code").await;

    assert!(result.is_err());
    // Albums were fetched (and non-empty) before the artists fetch failed,
    // but no removal call of any category may have been issued
    assert_eq!(
        stub.calls().await,
        vec!["POST /api/token", "GET /me/albums", "GET /me/following"]
    );
}

#[tokio::test]
async fn unfollows_each_playlist_individually() {
    let stub = Stub {
        playlists: 3,
        ..Stub::default()
    };
    let addr = start_stub(stub.clone()).await;

    let summary = clean_account(stub_config(addr), "valid-code").await.unwrap();
    assert_eq!(summary.playlists, 3);

    // Never a batched playlist call: one unfollow per playlist, in order
    let calls = stub.calls().await;
    let playlist_calls: Vec<&String> = calls
        .iter()
        .filter(|c| c.starts_with("DELETE /playlists/"))
        .collect();
    assert_eq!(
        playlist_calls,
        vec![
            "DELETE /playlists/playlist0/followers",
            "DELETE /playlists/playlist1/followers",
            "DELETE /playlists/playlist2/followers",
        ]
    );
}
