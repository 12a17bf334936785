#![allow(dead_code)]

use std::{
    collections::VecDeque,
    net::SocketAddr,
    path::Path,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
};
use serde_json::{Value, json};
use spotlist::{
    config::{Config, DEFAULT_SCOPE},
    management::CredentialStore,
    types::Credentials,
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct Script {
    api: VecDeque<(StatusCode, Value)>,
    token: VecDeque<(StatusCode, Value)>,
    calls: Vec<RecordedCall>,
}

/// Local stand-in for the accounts and Web API hosts.
///
/// Responses are served in the order they were pushed; an unscripted request
/// gets a 500.
pub struct MockSpotify {
    pub addr: SocketAddr,
    script: Arc<Mutex<Script>>,
}

impl MockSpotify {
    pub async fn start() -> Self {
        let script = Arc::new(Mutex::new(Script::default()));
        let app = Router::new().fallback(handle).with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, script }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn push_api(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.script.lock().unwrap().api.push_back((status, body));
    }

    pub fn push_token(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.script.lock().unwrap().token.push_back((status, body));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn api_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path != "/api/token")
            .collect()
    }

    pub fn token_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.path == "/api/token")
            .collect()
    }

    pub fn config(&self, credentials_path: &Path) -> Config {
        Config {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_uri: "http://127.0.0.1:5000/callback".to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: self.url("/authorize"),
            token_url: self.url("/api/token"),
            api_url: self.url("/v1"),
            server_addr: "127.0.0.1:0".parse().unwrap(),
            user_id: None,
            credentials_path: credentials_path.to_path_buf(),
        }
    }
}

async fn handle(
    State(script): State<Arc<Mutex<Script>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    let mut script = script.lock().unwrap();
    script.calls.push(RecordedCall {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    let next = if uri.path() == "/api/token" {
        script.token.pop_front()
    } else {
        script.api.pop_front()
    };

    match next {
        Some((status, body)) => (status, Json(body)),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "unscripted request" })),
        ),
    }
}

pub async fn write_credentials(path: &Path, access_token: &str, refresh_token: &str) {
    CredentialStore::new(path)
        .persist(&Credentials {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
        })
        .await
        .unwrap();
}

pub fn playlist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "public": true,
        "collaborative": false,
        "snapshot_id": format!("{}-snapshot", id),
        "owner": { "id": "owner", "display_name": "Owner" },
        "tracks": { "href": format!("https://api.example/playlists/{}/tracks", id), "total": 3 },
        "uri": format!("spotify:playlist:{}", id)
    })
}

pub fn playlist_page(items: Vec<Value>, offset: u64, total: u64, next: Option<String>) -> Value {
    json!({
        "href": "https://api.example/v1/users/owner/playlists",
        "items": items,
        "limit": 2,
        "next": next,
        "offset": offset,
        "previous": null,
        "total": total
    })
}
