use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::models::{DEFAULT_MODEL, ENDPOINT};

pub struct Config {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            endpoint: try_load("GEMINI_ENDPOINT", ENDPOINT),
            model: try_load("GEMINI_MODEL", DEFAULT_MODEL),
            api_key: read_key("GEMINI_API_KEY"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_key(key: &str) -> String {
    env::var(key)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {key}: {e}");
        })
        .expect("API key misconfigured!")
}
