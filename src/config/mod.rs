use reqwest::Url;
use tracing::debug;

use crate::errors::LlmPingError;

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

/// Environment variable holding the bearer token.
pub const AUTH_TOKEN_VAR: &str = "ANTHROPIC_AUTH_TOKEN";

/// Resolved connection settings for the messages API. Built once at startup
/// and passed into the provider, so nothing else touches the process
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub auth_token: String,
}

impl Config {
    /// Validate explicit values. Both are required; the base URL must parse
    /// as an http(s) URL.
    pub fn new(base_url: &str, auth_token: &str) -> Result<Self, LlmPingError> {
        if auth_token.trim().is_empty() {
            return Err(LlmPingError::Config(format!(
                "auth token is empty (set {} or pass --token)",
                AUTH_TOKEN_VAR
            )));
        }

        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(LlmPingError::Config(format!(
                "base URL is empty (set {} or pass --base-url)",
                BASE_URL_VAR
            )));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| LlmPingError::Config(format!("invalid base URL '{}': {}", trimmed, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(LlmPingError::Config(format!(
                "base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    /// Resolve from CLI overrides, falling back to environment variables.
    pub fn resolve(
        base_url: Option<&str>,
        auth_token: Option<&str>,
    ) -> Result<Self, LlmPingError> {
        let base_url = match base_url {
            Some(v) => v.to_string(),
            None => required_env(BASE_URL_VAR)?,
        };
        let auth_token = match auth_token {
            Some(v) => v.to_string(),
            None => required_env(AUTH_TOKEN_VAR)?,
        };

        debug!(base_url = %base_url, "Resolved API configuration");
        Self::new(&base_url, &auth_token)
    }
}

fn required_env(var: &str) -> Result<String, LlmPingError> {
    std::env::var(var)
        .map_err(|_| LlmPingError::Config(format!("{} is not set", var)))
}
