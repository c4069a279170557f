use crate::{
    Res,
    types::{Artist, FollowedArtistsResponse},
};

use super::SpotifyClient;
use super::client::PAGE_LIMIT;

impl SpotifyClient {
    /// Retrieves one page of artists the user follows.
    ///
    /// The following endpoint nests its page under an `artists` field and
    /// requires the `type=artist` selector; the artists themselves carry
    /// their id at the top level of each item.
    pub async fn followed_artists(&self) -> Res<Vec<Artist>> {
        let api_url = format!(
            "{uri}/me/following?type=artist&limit={limit}",
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

        let res = response.json::<FollowedArtistsResponse>().await?;
        Ok(res.artists.items)
    }

    /// Unfollows artists in one bulk call.
    pub async fn unfollow_artists(&self, ids: &[&str]) -> Res<()> {
        let api_url = format!(
            "{uri}/me/following?type=artist&ids={ids}",
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
}
