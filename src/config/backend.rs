use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Connection settings for the analytics backend
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(BackendConfig {
            base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid BACKEND_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an `/api/...` path, tolerant of a trailing slash on the base
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build the shared HTTP client
    pub fn create_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(AppError::HttpClient)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000", 30)
    }
}
