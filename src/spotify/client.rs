use std::sync::Arc;

use reqwest::Client;

use crate::{Res, config::ClientConfig};

/// Page size requested from every library endpoint; the documented
/// per-page maximum. Pagination is never continued past the first page.
pub(super) const PAGE_LIMIT: u32 = 50;

/// Request-scoped Spotify API client.
///
/// Holds the shared immutable configuration, its own HTTP client, and the
/// access token once [`SpotifyClient::exchange_code`] has run. Construct a
/// fresh instance per callback request; the token is never stored anywhere
/// else.
pub struct SpotifyClient {
    pub(super) http: Client,
    pub(super) config: Arc<ClientConfig>,
    pub(super) access_token: Option<String>,
}

impl SpotifyClient {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        SpotifyClient {
            http: Client::new(),
            config,
            access_token: None,
        }
    }

    /// Constructs the authorization URL users are redirected to.
    ///
    /// # Arguments
    ///
    /// * `scopes` - Permission scopes to request, joined space-separated
    /// * `state` - Opaque state value echoed back on the callback
    pub fn authorize_url(&self, scopes: &[&str], state: &str) -> String {
        format!(
            "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
            auth_url = self.config.auth_url,
            client_id = self.config.client_id,
            redirect_uri = self.config.redirect_uri,
            scope = scopes.join("%20"),
            state = state
        )
    }

    /// Returns the access token, or an error when the code exchange has not
    /// run yet. Every library call goes through here.
    pub(super) fn token(&self) -> Res<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| "access token not set; run the code exchange first".into())
    }
}
