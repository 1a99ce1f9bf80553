// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account, session, and profile operations.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, ProfilePayload, RegistrationRequest, UserProfile,
};
use crate::session::Session;
use validator::Validate;

/// Typed wrapper for the `/users` and `/user` routes.
#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account. The payload is validated locally first so
    /// obviously malformed registrations never reach the network.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<UserProfile, ApiError> {
        request
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.post("/users/register", request).await
    }

    /// Log in and store the returned credential and user id in the
    /// session store.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            username_or_email: username_or_email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post("/users/login", &request).await?;

        let token = response.credential().ok_or_else(|| {
            ApiError::Decode("login response carried no credential".to_string())
        })?;
        self.client.session().set(Session {
            access_token: token.to_string(),
            user_id: response.id,
        });
        tracing::debug!(user_id = response.id, "session established");

        Ok(response)
    }

    /// Drop the local session. No server call is involved.
    pub fn logout(&self) {
        self.client.session().clear();
        tracing::debug!("session cleared on logout");
    }

    /// Fetch the logged-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client.get("/user/profile").await
    }

    /// Like [`profile`](Self::profile), but maps 404 to `None`: a missing
    /// profile switches callers to the creation flow instead of an error.
    pub async fn try_profile(&self) -> Result<Option<UserProfile>, ApiError> {
        match self.profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create the profile for a freshly registered account.
    pub async fn create_profile(&self, payload: &ProfilePayload) -> Result<UserProfile, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.post("/user/profile", payload).await
    }

    /// Update the existing profile.
    pub async fn update_profile(&self, payload: &ProfilePayload) -> Result<UserProfile, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.put("/user/profile", payload).await
    }

    /// Delete the account server-side, then drop the local session.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.client.delete("/user/account").await?;
        self.client.session().clear();
        tracing::info!("account deleted, session cleared");
        Ok(())
    }

    /// Ask the server whether the stored credential is still accepted.
    ///
    /// A 401 answer still purges the session (that handling is
    /// unconditional); it surfaces here as `Ok(false)` rather than an
    /// error because "no" is the expected answer for a stale credential.
    pub async fn validate_token(&self) -> Result<bool, ApiError> {
        match self.client.get_ok("/user/validate-token").await {
            Ok(()) => Ok(true),
            Err(ApiError::Unauthenticated) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether an account with this email already exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        self.client
            .get_with("/users/check-email", &[("email", email)])
            .await
    }
}
