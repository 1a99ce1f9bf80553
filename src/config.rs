//! Client configuration loaded from environment variables.

use std::env;

/// Default API base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Meal Mate API (including the `/api` prefix)
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a local-development default, so loading never
    /// fails; unparseable values fall back to the default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_url: env::var("MEALMATE_API_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout_secs: env::var("MEALMATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}
