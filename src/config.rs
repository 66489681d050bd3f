//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in from `APPLYMANDU_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("APPLYMANDU_API_URL must be an http(s) URL, got `{0}`")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `APPLYMANDU_API_URL`: default `http://localhost:8000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a non-http(s) URL.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_raw(option_env!("APPLYMANDU_API_URL"))
    }

    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a non-http(s) URL.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(raw.map(str::trim).filter(|v| !v.is_empty()))?;
        Ok(Self { api_base_url })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.unwrap_or(DEFAULT_API_BASE_URL).trim_end_matches('/');
    let has_scheme = url.starts_with("http://") || url.starts_with("https://");
    let has_host = url.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBaseUrl(url.to_owned()));
    }
    Ok(url.to_owned())
}
