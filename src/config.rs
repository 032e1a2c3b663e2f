// config.rs
use std::env;
use std::time::Duration;

use crate::errors::{AppError, Result};

const DEFAULT_BASE_URL: &str = "https://adsplatformback.strtesting.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("PUBDASH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("PUBDASH_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::configuration("PUBDASH_TIMEOUT_SECS must be a number of seconds")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(AppError::configuration("API base URL must not be empty"));
        }

        Ok(ApiConfig {
            // trailing slashes break endpoint joining
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
