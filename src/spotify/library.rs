use serde_json::json;

use crate::{
    Res,
    types::{
        SavedAlbumEntry, SavedAlbumsPage, SavedShowEntry, SavedShowsPage, SavedTrackEntry,
        SavedTracksPage,
    },
};

use super::SpotifyClient;
use super::client::PAGE_LIMIT;

impl SpotifyClient {
    /// Retrieves one page of the user's saved albums.
    ///
    /// # Returns
    ///
    /// The saved-album entries of the first page, each wrapping the album
    /// itself under its `album` field.
    pub async fn saved_albums(&self) -> Res<Vec<SavedAlbumEntry>> {
        let api_url = format!(
            "{uri}/me/albums?limit={limit}",
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

        let page = response.json::<SavedAlbumsPage>().await?;
        Ok(page.items)
    }

    /// Removes albums from the user's library in one bulk call.
    pub async fn remove_saved_albums(&self, ids: &[&str]) -> Res<()> {
        let api_url = format!("{uri}/me/albums", uri = self.config.api_url);

        self.http
            .delete(&api_url)
            .bearer_auth(self.token()?)
            .json(&json!({ "ids": ids }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Retrieves one page of the user's saved shows.
    pub async fn saved_shows(&self) -> Res<Vec<SavedShowEntry>> {
        let api_url = format!(
            "{uri}/me/shows?limit={limit}",
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

        let page = response.json::<SavedShowsPage>().await?;
        Ok(page.items)
    }

    /// Removes shows from the user's library in one bulk call.
    ///
    /// The shows endpoint takes its id list as a comma-separated query
    /// parameter rather than a JSON body.
    pub async fn remove_saved_shows(&self, ids: &[&str]) -> Res<()> {
        let api_url = format!(
            "{uri}/me/shows?ids={ids}",
            uri = self.config.api_url,
            ids = ids.join(",")
        );

        self.http
            .delete(&api_url)
            .bearer_auth(self.token()?)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Retrieves one page of the user's saved tracks.
    pub async fn saved_tracks(&self) -> Res<Vec<SavedTrackEntry>> {
        let api_url = format!(
            "{uri}/me/tracks?limit={limit}",
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

        let page = response.json::<SavedTracksPage>().await?;
        Ok(page.items)
    }

    /// Removes tracks from the user's library in one bulk call.
    pub async fn remove_saved_tracks(&self, ids: &[&str]) -> Res<()> {
        let api_url = format!("{uri}/me/tracks", uri = self.config.api_url);

        self.http
            .delete(&api_url)
            .bearer_auth(self.token()?)
            .json(&json!({ "ids": ids }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
