use crate::{Res, info, types::TokenResponse};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the OAuth 2.0 authorization-code grant by posting the code
    /// to the token endpoint, authenticating with the client id and secret
    /// via HTTP Basic auth. On success the access token is attached to this
    /// client and used for all subsequent calls.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received on the OAuth callback
    ///
    /// # Errors
    ///
    /// Fails on network errors and on any non-success response from the
    /// token endpoint; an invalid, expired, or absent code surfaces here as
    /// a 4xx from Spotify.
    ///
    /// # Security Note
    ///
    /// The client secret is only ever sent to the token endpoint and never
    /// appears in any response produced by this service.
    pub async fn exchange_code(&mut self, code: &str) -> Res<()> {
        let res = self
            .http
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.config.redirect_uri),
            ])
            .send()
            .await?
            .error_for_status()?;

        let token = res.json::<TokenResponse>().await?;
        info!("Access token obtained (expires in {}s)", token.expires_in);

        self.access_token = Some(token.access_token);
        Ok(())
    }
}
