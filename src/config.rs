//! Configuration for the directory client.
//!
//! The backend base URL is the single required setting. A missing or
//! malformed value is a startup error, never a runtime path.

use std::env;
use std::time::Duration;

use crate::Result;
use crate::error::CatalogError;

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_VAR: &str = "ASKMYCITY_BACKEND_URL";
/// Environment variable overriding the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "ASKMYCITY_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validated settings for talking to the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Upper bound on how long any single request may take. The upstream
    /// contract has no timeout, so failures past this bound surface as
    /// network errors rather than an unbounded wait.
    pub timeout: Duration,
}

impl DirectoryConfig {
    /// Build a validated configuration from explicit values.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::config("backend base URL cannot be empty"));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::config(format!(
                "backend base URL must be an HTTP or HTTPS URL, got '{base_url}'"
            )));
        }
        if timeout.is_zero() || timeout > Duration::from_secs(MAX_TIMEOUT_SECS) {
            return Err(CatalogError::config(format!(
                "request timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds"
            )));
        }
        Ok(Self { base_url, timeout })
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BACKEND_URL_VAR).map_err(|_| {
            CatalogError::config(format!("missing {BACKEND_URL_VAR} environment variable"))
        })?;

        let timeout_secs = match env::var(TIMEOUT_VAR) {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                CatalogError::config(format!(
                    "{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }
}
