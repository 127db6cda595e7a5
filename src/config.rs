use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "TRELLO_API_KEY";
const TOKEN_VAR: &str = "TRELLO_TOKEN";
const BASE_URL_VAR: &str = "TRELLO_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} (set it in the environment or in .env)")]
    Missing(&'static str),
}

/// Credentials and endpoint for the Trello API, built once at startup.
#[derive(Clone)]
pub struct TrelloConfig {
    pub api_key: String,
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

// Keeps the key and token out of logs.
impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TrelloConfig {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env is fine; real env vars are enough.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let api_key = required(API_KEY_VAR)?;
        let token = required(TOKEN_VAR)?;
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            token,
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }
}
