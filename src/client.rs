// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session-aware HTTP client for the Meal Mate API.
//!
//! Handles:
//! - Bearer credential attachment from the injected session store
//! - Unconditional session purge + expiry hook on any 401 response
//! - Status-to-error mapping for everything else
//!
//! Each call is fire-once: no retries, no queueing, no caching.

use crate::config::Config;
use crate::error::ApiError;
use crate::session::SessionStore;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Callback fired after a 401 forced the session to be cleared.
///
/// This is the navigation seam: an interactive consumer uses it to route
/// the user back to its login view.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Meal Mate API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the session
/// store.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ApiClient {
    /// Start building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build a client from configuration with an injected session store.
    pub fn from_config(config: &Config, session: SessionStore) -> Result<Self, ApiError> {
        Self::builder()
            .base_url(&config.api_url)
            .timeout(Duration::from_secs(config.timeout_secs))
            .session(session)
            .build()
    }

    /// The session store this client reads credentials from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .send(self.http.get(self.url(path)).query(query))
            .await?;
        Self::decode(response).await
    }

    /// GET where only the status matters; the body is discarded.
    pub async fn get_ok(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.get(self.url(path))).await?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.http.post(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// DELETE a resource. Success responses may carry no body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the credential (when present), send once, and check status.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(ApiError::from_transport)?;
        self.check_response(response).await
    }

    /// Map the response status; on 401 purge the session before the caller
    /// sees any result.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            tracing::warn!("credential rejected by server, session cleared");
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
            return Err(ApiError::Unauthenticated);
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), body = %body, "server error");
        }
        Err(ApiError::from_status(status, body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Builder for [`ApiClient`].
///
/// One configurable client abstraction shared across resource services,
/// replacing per-call header assembly.
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    session: SessionStore,
    on_session_expired: Option<SessionExpiredHook>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            base_url: config.api_url,
            timeout: Duration::from_secs(config.timeout_secs),
            session: SessionStore::new(),
            on_session_expired: None,
        }
    }
}

impl ApiClientBuilder {
    /// Base endpoint, e.g. `http://localhost:8080/api`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Session store the client reads credentials from and purges on 401.
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    /// Hook invoked after a 401 cleared the session.
    pub fn on_session_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                ApiError::Internal(anyhow::anyhow!("failed to build HTTP client: {}", e))
            })?;

        Ok(ApiClient {
            http,
            base_url: self.base_url,
            session: self.session,
            on_session_expired: self.on_session_expired,
        })
    }
}
