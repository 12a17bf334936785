use crate::{
    error::Result,
    spotify::client::{SpotifyClient, ensure_ok},
    types::{ApiRequest, UserProfile},
};

impl SpotifyClient {
    /// Fetches the profile of the user the credentials belong to (`GET /me`).
    pub async fn fetch_current_user(&mut self) -> Result<UserProfile> {
        let request = ApiRequest::get(self.endpoint(&["me"])?);
        let response = ensure_ok(self.authenticated_call(request).await?)?;
        Ok(response.json().await?)
    }
}
