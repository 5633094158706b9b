// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client configuration

use std::env;

use url::Url;

use crate::error::{Error, Result};
use crate::http::DEFAULT_USER_AGENT;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "MOVIERAMA_API_URL";

/// Environment variable setting the `Origin` header
pub const ENV_ORIGIN: &str = "MOVIERAMA_ORIGIN";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Origin sent with every request (cross-origin mode)
    pub origin: Option<String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `MOVIERAMA_API_URL` and `MOVIERAMA_ORIGIN`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_string();
            }
        }
        if let Ok(origin) = env::var(ENV_ORIGIN) {
            if !origin.trim().is_empty() {
                config.origin = Some(origin.trim().to_string());
            }
        }
        config
    }

    /// Set base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set origin
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that the base URL is usable
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Base URL '{}' cannot carry a path",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Full URL for a request path. The path is appended verbatim.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
