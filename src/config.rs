use serde::Deserialize;
use std::env;

use crate::errors::{constants, Result};

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub google_api_key: Option<String>,
    pub otel_http_url: Option<String>,
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDRESS.to_string()
}

impl Config {
    /// Load configuration from a TOML file, falling back to environment
    /// variables when the file is absent.
    pub fn load(path: &str) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str::<Config>(&raw)?),
            Err(_) => Ok(Self::from_env()),
        }
    }

    pub fn from_env() -> Self {
        Config {
            bind_address: env::var(constants::BIND_ADDRESS_ENV)
                .unwrap_or_else(|_| default_bind_address()),
            google_api_key: env::var(constants::API_KEY_ENV).ok(),
            otel_http_url: env::var(constants::OTEL_HTTP_URL_ENV).ok(),
        }
    }
}
