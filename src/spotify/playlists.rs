use crate::{
    Res,
    types::{Playlist, PlaylistsPage},
};

use super::SpotifyClient;
use super::client::PAGE_LIMIT;

impl SpotifyClient {
    /// Retrieves one page of the playlists the user owns or follows.
    pub async fn playlists(&self) -> Res<Vec<Playlist>> {
        let api_url = format!(
            "{uri}/me/playlists?limit={limit}",
            uri = self.config.api_url,
            limit = PAGE_LIMIT
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(self.token()?)
            .send()
            .await?
            .error_for_status()?;

        let page = response.json::<PlaylistsPage>().await?;
        Ok(page.items)
    }

    /// Unfollows a single playlist.
    ///
    /// Unfollowing also covers playlists the user owns; the Web API has no
    /// bulk variant of this operation, so callers issue one call per
    /// playlist.
    pub async fn unfollow_playlist(&self, id: &str) -> Res<()> {
        let api_url = format!(
            "{uri}/playlists/{id}/followers",
            uri = self.config.api_url,
            id = id
        );

        self.http
            .delete(&api_url)
            .bearer_auth(self.token()?)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
