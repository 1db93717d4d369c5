//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

/// Default login entry point used for the sign-out redirect.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, e.g. `https://schedule.example.com` (no trailing slash)
    pub api_base_url: String,
    /// Where to navigate after the session is invalidated
    pub login_path: String,
    /// File holding the persisted bearer credential
    pub credential_path: PathBuf,
}

impl Config {
    /// Config for tests: local backend, credential file in the temp dir.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            credential_path: env::temp_dir().join("guild-scheduler-test-token"),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| ConfigError::Missing("API_BASE_URL"))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        if api_base_url.is_empty() {
            return Err(ConfigError::Missing("API_BASE_URL"));
        }

        Ok(Self {
            api_base_url,
            login_path: env::var("LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_string()),
            credential_path: env::var("CREDENTIAL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_credential_path()),
        })
    }
}

/// `$XDG_CONFIG_HOME/guild-scheduler/token`, falling back to `~/.config`.
fn default_credential_path() -> PathBuf {
    if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("guild-scheduler").join("token");
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("guild-scheduler")
            .join("token");
    }
    PathBuf::from(".guild-scheduler-token")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
