// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use mealmate_client::client::ApiClient;
use mealmate_client::session::{Session, SessionStore};
use std::sync::Once;
use std::time::Duration;
use wiremock::MockServer;

static INIT: Once = Once::new();

/// Initialize test logging once (respects RUST_LOG).
#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init()
            .ok();
    });
}

/// Session seeded into authenticated test clients.
#[allow(dead_code)]
pub fn test_session() -> Session {
    Session {
        access_token: "test-token".to_string(),
        user_id: 7,
    }
}

/// Client with an empty session store pointed at the mock server.
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    client_with_store(server, SessionStore::new())
}

/// Client whose store already holds [`test_session`].
#[allow(dead_code)]
pub fn authed_client(server: &MockServer) -> ApiClient {
    let store = SessionStore::new();
    store.set(test_session());
    client_with_store(server, store)
}

/// Client over a caller-provided store, with a short test timeout.
#[allow(dead_code)]
pub fn client_with_store(server: &MockServer, store: SessionStore) -> ApiClient {
    init_tracing();
    ApiClient::builder()
        .base_url(&server.uri())
        .timeout(Duration::from_secs(2))
        .session(store)
        .build()
        .expect("client should build")
}
