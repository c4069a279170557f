//! Configuration management for the Spotify Account Cleaner.
//!
//! This module handles loading configuration from environment variables and
//! an optional `.env` file in the working directory. The service needs the
//! Spotify application credentials and its own public base URL; everything
//! else (the Spotify endpoint URLs) ships as defaults that tests may
//! override.
//!
//! The configuration is loaded once at startup, validated, and then shared
//! read-only across all requests.

use std::env;

/// Spotify's OAuth authorization endpoint, where users grant consent.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify's token endpoint for the authorization-code exchange.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing `.env` files are tolerated; configuration may equally come from
/// the real process environment. Values already present in the environment
/// take precedence over the file.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Immutable client configuration shared by all requests.
///
/// Holds the Spotify application credentials, the redirect URI derived from
/// the service's public base URL, and the three Spotify endpoint URLs. The
/// endpoint URLs are part of the record (rather than hardcoded at the call
/// sites) so a test can point a client at a local stub service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl ClientConfig {
    /// Builds the configuration from environment variables.
    ///
    /// Requires `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, and `BASE_URL`.
    /// The redirect URI is derived as `<BASE_URL>/callback`; a trailing slash
    /// on `BASE_URL` is tolerated. The Spotify endpoint URLs are filled in
    /// from the module constants.
    ///
    /// # Errors
    ///
    /// Returns a message naming every missing variable so the startup
    /// failure tells the operator exactly what to set.
    pub fn from_env() -> Result<Self, String> {
        let mut missing = Vec::new();

        let client_id = require_var("SPOTIFY_CLIENT_ID", &mut missing);
        let client_secret = require_var("SPOTIFY_CLIENT_SECRET", &mut missing);
        let base_url = require_var("BASE_URL", &mut missing);

        if !missing.is_empty() {
            return Err(format!("{} must be set", missing.join(", ")));
        }

        Ok(ClientConfig {
            client_id,
            client_secret,
            redirect_uri: format!("{}/callback", base_url.trim_end_matches('/')),
            auth_url: SPOTIFY_AUTH_URL.to_string(),
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        })
    }
}

fn require_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
