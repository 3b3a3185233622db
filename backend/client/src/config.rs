use std::env;

use tracing::info;

pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8080";

pub struct Config {
    pub registry_url: String,
}

impl Config {
    /// `url` from the command line wins over `REGISTRY_URL`.
    pub fn load(url: Option<String>) -> Self {
        Self::from_lookup(url, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(url: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let registry_url = url.or_else(|| lookup("REGISTRY_URL")).unwrap_or_else(|| {
            info!("REGISTRY_URL not set, using default: {DEFAULT_REGISTRY_URL}");
            DEFAULT_REGISTRY_URL.to_string()
        });

        Self {
            registry_url: registry_url.trim_end_matches('/').to_string(),
        }
    }
}
