use serde::{Deserialize, Serialize};

/// Query schema shared by both routes. The authorization redirect ignores
/// it; the callback needs `code` for the token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

/// JSON body of every response from the callback route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// The consumed subset of the token-grant response. Spotify sends more
/// fields (token type, scope, refresh token); the cleanup uses the access
/// token once and discards it, so nothing else is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

/// One page of the user's saved albums. Each entry wraps the album itself
/// under an `album` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumsPage {
    pub items: Vec<SavedAlbumEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAlbumEntry {
    pub album: AlbumSummary,
}

impl SavedAlbumEntry {
    pub fn album_id(&self) -> &str {
        &self.album.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
}

/// Response of the followed-artists endpoint. Unlike the other library
/// endpoints the page is nested under an `artists` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistsPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistsPage {
    pub items: Vec<Artist>,
}

/// Followed artists carry their id at the top level of each item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

/// One page of the user's saved shows, each entry wrapping the show under
/// a `show` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedShowsPage {
    pub items: Vec<SavedShowEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedShowEntry {
    pub show: ShowSummary,
}

impl SavedShowEntry {
    pub fn show_id(&self) -> &str {
        &self.show.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowSummary {
    pub id: String,
    pub name: String,
}

/// One page of the user's saved tracks, each entry wrapping the track under
/// a `track` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksPage {
    pub items: Vec<SavedTrackEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrackEntry {
    pub track: TrackSummary,
}

impl SavedTrackEntry {
    pub fn track_id(&self) -> &str {
        &self.track.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub name: String,
}

/// One page of the playlists the user owns or follows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsPage {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

/// Per-category item counts of one completed cleanup.
///
/// Counts are taken from the snapshot lengths at fetch time, before any
/// removal call is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    pub albums: usize,
    pub artists: usize,
    pub shows: usize,
    pub tracks: usize,
    pub playlists: usize,
}

impl CleanupSummary {
    /// Renders the user-facing status line embedding all five counts.
    pub fn message(&self) -> String {
        format!(
            "Spotify account cleaned! Removed: {} albums, {} artists, {} shows, {} tracks, {} playlists.",
            self.albums, self.artists, self.shows, self.tracks, self.playlists
        )
    }
}
