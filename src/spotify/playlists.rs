use std::path::Path;

use crate::{
    error::Result,
    info,
    spotify::client::{SpotifyClient, ensure_ok},
    types::{ApiRequest, PlaylistPage},
};

/// Page size requested for the first playlist page. Later pages follow the
/// `next` links returned by the API, which carry their own limit.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Fetches every playlist of `user_id`, following `next` links until exhausted.
    ///
    /// The items of all pages are accumulated into a single page: `items`
    /// holds every playlist in API order, `total` and `limit` come from the
    /// API, `offset` is 0 and `next`/`previous` are cleared.
    pub async fn fetch_user_playlists(&mut self, user_id: &str) -> Result<PlaylistPage> {
        let first = ApiRequest::get(self.endpoint(&["users", user_id, "playlists"])?)
            .with_query("limit", PLAYLIST_PAGE_LIMIT.to_string());

        let mut merged = self.fetch_playlist_page(first).await?;
        let mut next = merged.next.take();
        let mut pages = 1;

        while let Some(url) = next {
            let page = self.fetch_playlist_page(ApiRequest::get(url)).await?;
            pages += 1;
            merged.total = page.total.max(merged.total);
            merged.items.extend(page.items);
            next = page.next;
        }

        info!(
            "Fetched {} playlists for {} in {} page(s)",
            merged.items.len(),
            user_id,
            pages
        );

        merged.offset = 0;
        merged.previous = None;
        Ok(merged)
    }

    async fn fetch_playlist_page(&mut self, request: ApiRequest) -> Result<PlaylistPage> {
        let response = ensure_ok(self.authenticated_call(request).await?)?;
        Ok(response.json().await?)
    }
}

/// Writes the playlist page as pretty-printed JSON, creating parent directories.
pub async fn save_playlists(page: &PlaylistPage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(page)?;
    async_fs::write(path, json).await?;
    Ok(())
}
