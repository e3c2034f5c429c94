#![allow(dead_code)]

use clawsino::client::ClawsinoClient;
use clawsino::config::ClientConfig;
use serde_json::Value;
use wiremock::MockServer;

pub const TOKEN: &str = "session-token-1";

pub fn client(server: &MockServer, token: Option<&str>) -> ClawsinoClient {
    let mut config = ClientConfig::new().with_base_url(server.uri());
    if let Some(token) = token {
        config = config.with_token(token);
    }
    ClawsinoClient::new(config).expect("client builds")
}

pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| serde_json::from_slice(&req.body).unwrap_or(Value::Null))
        .collect()
}

pub async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| {
            req.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}
