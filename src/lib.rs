// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Meal Mate client: session-aware access to the Meal Mate REST API plus
//! derived health metrics (BMI, BMR, recommended calorie intake).
//!
//! This crate is the client layer only: it authenticates requests from an
//! injected session store, maps server responses to a typed error
//! taxonomy, and exposes per-resource services. Presentation is the
//! consumer's job.

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod session;

use client::ApiClient;
use config::Config;
use error::ApiError;
use services::{DashboardService, MealService, UserService, WorkoutService};
use session::SessionStore;

/// Shared application context owning the session and the services.
///
/// Build one per application; clone freely — all clones share the same
/// session slot and connection pool.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub session: SessionStore,
    pub users: UserService,
    pub meals: MealService,
    pub workouts: WorkoutService,
    pub dashboard: DashboardService,
}

impl AppContext {
    /// Build a context from configuration with a fresh session store.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let session = SessionStore::new();
        let client = ApiClient::from_config(&config, session.clone())?;
        Ok(Self::from_client(config, session, client))
    }

    /// Build a context whose client fires `hook` whenever a 401 forces
    /// the session to be cleared — the consumer's cue to show its login
    /// view.
    pub fn with_session_expired_hook<F>(config: Config, hook: F) -> Result<Self, ApiError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let session = SessionStore::new();
        let client = ApiClient::builder()
            .base_url(&config.api_url)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .session(session.clone())
            .on_session_expired(hook)
            .build()?;
        Ok(Self::from_client(config, session, client))
    }

    fn from_client(config: Config, session: SessionStore, client: ApiClient) -> Self {
        Self {
            config,
            session,
            users: UserService::new(client.clone()),
            meals: MealService::new(client.clone()),
            workouts: WorkoutService::new(client.clone()),
            dashboard: DashboardService::new(client),
        }
    }
}
