use crate::{config::Config, error, info, success};

pub async fn me(config: &Config) {
    let mut client = super::load_client(config).await;

    let pb = super::spinner("Fetching current user...");
    let profile = client.fetch_current_user().await;
    pb.finish_and_clear();

    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => error!("Failed to fetch current user: {}", e),
    };

    success!("Fetched profile of {}", profile.id);
    info!(
        "display name: {}",
        profile.display_name.as_deref().unwrap_or("-")
    );
    info!("email: {}", profile.email.as_deref().unwrap_or("-"));
    info!("country: {}", profile.country.as_deref().unwrap_or("-"));
    info!("product: {}", profile.product.as_deref().unwrap_or("-"));

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to render profile: {}", e),
    }
}
