mod common;

use std::time::{Duration, Instant};

use reqwest::{StatusCode, redirect::Policy};
use serde_json::json;
use spotlist::{error::Error, spotify::auth, types::Credentials};
use tempfile::TempDir;
use tokio::net::TcpListener;
use url::Url;

use common::MockSpotify;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_run_times_out_without_callback() {
    let mock = MockSpotify::start().await;
    let dir = TempDir::new().unwrap();
    let config = mock.config(&dir.path().join("secrets"));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let started = Instant::now();
    let err = auth::run(listener, &config, Duration::from_millis(200))
        .await
        .unwrap_err();

    assert!(started.elapsed() >= Duration::from_millis(200));
    assert!(matches!(err, Error::AuthorizationTimeout(t) if t == Duration::from_millis(200)));
    assert!(err.to_string().contains("0.2s"));
    assert!(!dir.path().join("secrets").exists());
    assert!(mock.token_calls().is_empty());
}

#[tokio::test]
async fn test_run_stops_after_first_callback() {
    let mock = MockSpotify::start().await;
    mock.push_token(200, json!({ "access_token": "A", "refresh_token": "R" }));
    let dir = TempDir::new().unwrap();
    let credentials_path = dir.path().join("secrets");
    let config = mock.config(&credentials_path);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let run =
        tokio::spawn(async move { auth::run(listener, &config, Duration::from_secs(10)).await });

    let http = client();
    let res = http.get(format!("{}/", base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    let location = Url::parse(res.headers()["location"].to_str().unwrap()).unwrap();
    let nonce = location
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned())
        .unwrap();

    let res = http
        .get(format!("{}/callback?code=the-code&state={}", base_url, nonce))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let credentials = tokio::time::timeout(Duration::from_secs(5), run)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let expected = Credentials {
        access_token: "A".to_string(),
        refresh_token: "R".to_string(),
    };
    assert_eq!(credentials, expected);

    let stored: Credentials =
        serde_json::from_str(&std::fs::read_to_string(&credentials_path).unwrap()).unwrap();
    assert_eq!(stored, expected);

    assert!(http.get(format!("{}/health", base_url)).send().await.is_err());
    assert_eq!(mock.token_calls().len(), 1);
}
