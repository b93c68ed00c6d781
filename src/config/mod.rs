use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod backend;

pub use backend::BackendConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub thresholds: ThresholdConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: String,
}

/// Day thresholds for the pending views
///
/// `overdue_days` is shared by both views; only the cash view has an
/// attention band.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdConfig {
    pub overdue_days: i64,
    pub cash_attention_days: i64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            overdue_days: 30,
            cash_attention_days: 7,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", name)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            backend: BackendConfig::from_env()?,
            thresholds: ThresholdConfig {
                overdue_days: parse_var("OVERDUE_DAYS", "30")?,
                cash_attention_days: parse_var("CASH_ATTENTION_DAYS", "7")?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "BACKEND_BASE_URL must not be empty".to_string(),
            ));
        }

        if self.backend.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Backend timeout must be greater than 0".to_string(),
            ));
        }

        self.thresholds.validate()
    }
}

impl ThresholdConfig {
    pub fn validate(&self) -> Result<()> {
        if self.overdue_days <= 0 || self.cash_attention_days <= 0 {
            return Err(AppError::Configuration(
                "Delay thresholds must be greater than 0".to_string(),
            ));
        }

        if self.cash_attention_days >= self.overdue_days {
            return Err(AppError::Configuration(format!(
                "CASH_ATTENTION_DAYS ({}) must be below OVERDUE_DAYS ({})",
                self.cash_attention_days, self.overdue_days
            )));
        }

        Ok(())
    }
}
