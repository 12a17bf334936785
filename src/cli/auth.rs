use std::time::Duration;

use crate::{config::Config, error, spotify, success};

pub async fn auth(config: &Config, timeout_secs: u64) {
    match spotify::auth::auth(config, Duration::from_secs(timeout_secs)).await {
        Ok(_) => success!(
            "Credentials stored in {}",
            config.credentials_path.display()
        ),
        Err(e) => error!("Authorization failed: {}", e),
    }
}
