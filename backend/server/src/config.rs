use std::{env, fmt::Display, str::FromStr};

use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::error::AppError;

pub struct Config {
    pub port: u16,
    pub redis_url: Option<String>,
    pub allowed_origin: HeaderValue,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(var)
    }

    /// Same as [`Config::load`] with `lookup` standing in for the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "RUST_PORT", "8080")?,
            redis_url: lookup("REDIS_URL"),
            allowed_origin: try_load(&lookup, "ALLOWED_ORIGIN", "http://localhost:3000")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found, using default");
        })
        .ok()
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            AppError::Config(key.to_string())
        })
}
