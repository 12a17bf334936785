use std::path::PathBuf;

use spotlist::{
    config::{Config, DEFAULT_API_URL, DEFAULT_REDIRECT_URI, DEFAULT_SCOPE, DEFAULT_TOKEN_URL},
    error::Error,
};

const KEYS: &[&str] = &[
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
    "SPOTIFY_SCOPE",
    "SPOTIFY_AUTH_URL",
    "SPOTIFY_TOKEN_URL",
    "SPOTIFY_API_URL",
    "SERVER_ADDRESS",
    "SPOTIFY_USER_ID",
    "SPOTLIST_CREDENTIALS_PATH",
];

fn set(key: &str, value: &str) {
    // Only this test touches the environment of this test binary.
    unsafe { std::env::set_var(key, value) }
}

fn clear() {
    for key in KEYS {
        unsafe { std::env::remove_var(key) }
    }
}

// Environment mutations are process-wide, so every case lives in one test.
#[test]
fn test_config_from_env() {
    clear();

    // Missing client id
    set("SPOTIFY_CLIENT_SECRET", "secret");
    match Config::from_env() {
        Err(Error::Config(msg)) => assert!(msg.contains("SPOTIFY_CLIENT_ID")),
        other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
    }

    // Blank client secret counts as missing
    set("SPOTIFY_CLIENT_ID", "id");
    set("SPOTIFY_CLIENT_SECRET", "   ");
    match Config::from_env() {
        Err(Error::Config(msg)) => assert!(msg.contains("SPOTIFY_CLIENT_SECRET")),
        other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
    }

    // Defaults
    set("SPOTIFY_CLIENT_SECRET", "secret");
    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "id");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.server_addr.to_string(), "127.0.0.1:5000");
    assert!(config.user_id.is_none());
    assert!(config.credentials_path.ends_with("spotlist/secrets.json"));

    // Overrides
    set("SPOTIFY_USER_ID", "someone");
    set("SERVER_ADDRESS", "0.0.0.0:8888");
    set("SPOTLIST_CREDENTIALS_PATH", "./secrets");
    let config = Config::from_env().unwrap();
    assert_eq!(config.user_id.as_deref(), Some("someone"));
    assert_eq!(config.server_addr.port(), 8888);
    assert_eq!(config.credentials_path, PathBuf::from("./secrets"));

    // Invalid server address
    set("SERVER_ADDRESS", "localhost");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    clear();
}
