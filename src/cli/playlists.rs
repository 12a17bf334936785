use std::path::PathBuf;

use tabled::Table;

use crate::{
    config::{Config, DEFAULT_PLAYLISTS_OUTPUT},
    error, info,
    spotify::playlists::save_playlists,
    success, utils,
};

pub async fn playlists(config: &Config, user_id: Option<String>, output: Option<PathBuf>) {
    let mut client = super::load_client(config).await;

    let user_id = match user_id.or_else(|| config.user_id.clone()) {
        Some(id) => id,
        None => {
            info!("No user id given, using the current user");
            match client.fetch_current_user().await {
                Ok(profile) => profile.id,
                Err(e) => error!("Failed to fetch current user: {}", e),
            }
        }
    };

    let pb = super::spinner(&format!("Fetching playlists of {}...", user_id));
    let page = client.fetch_user_playlists(&user_id).await;
    pb.finish_and_clear();

    let page = match page {
        Ok(page) => page,
        Err(e) => error!("Failed to fetch playlists of {}: {}", user_id, e),
    };

    if page.items.is_empty() {
        info!("User {} has no playlists", user_id);
    } else {
        let rows = utils::playlist_table_rows(&page.items);
        println!("{}", Table::new(rows));
    }

    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYLISTS_OUTPUT));
    if let Err(e) = save_playlists(&page, &output).await {
        error!("Failed to write {}: {}", output.display(), e);
    }

    success!(
        "{} playlists written to {}",
        page.items.len(),
        output.display()
    );
}
