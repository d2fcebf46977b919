// Copyright (c) 2025 - Cowboy AI, Inc.
//! Client configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the API token
pub const ENV_API_TOKEN: &str = "PUBLIC_CLOUD_API_TOKEN";
/// Environment variable overriding the API host
pub const ENV_HOST: &str = "PUBLIC_CLOUD_HOST";
/// Environment variable overriding the URL scheme
pub const ENV_SCHEME: &str = "PUBLIC_CLOUD_SCHEME";

/// Configuration for the public cloud API connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicCloudConfig {
    /// API host (e.g., "api.leaseweb.com")
    #[serde(default = "default_host")]
    pub host: String,

    /// URL scheme, "https" outside of tests
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// API token sent in the `X-LSW-Auth` header
    #[serde(default)]
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Page size requested when draining lists
    #[serde(default = "default_page_limit")]
    pub page_limit: i64,
}

fn default_host() -> String {
    "api.leaseweb.com".to_string()
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_limit() -> i64 {
    50
}

impl Default for PublicCloudConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            scheme: default_scheme(),
            api_token: String::new(),
            timeout_secs: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

impl PublicCloudConfig {
    /// Defaults overridden by `PUBLIC_CLOUD_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = env::var(ENV_API_TOKEN) {
            config.api_token = token;
        }
        if let Ok(host) = env::var(ENV_HOST) {
            config.host = host;
        }
        if let Ok(scheme) = env::var(ENV_SCHEME) {
            config.scheme = scheme;
        }

        config
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Root of the `publicCloud/v1` API
    pub fn base_url(&self) -> String {
        format!("{}://{}/publicCloud/v1", self.scheme, self.host)
    }
}
