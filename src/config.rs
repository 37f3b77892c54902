use std::env;
use std::time::Duration;
use crate::error::{AppError, Result};

const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

#[derive(Clone)]
pub struct Config {
    pub dictionary_url: String,
    pub search_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let dictionary_url =
            env::var("DICTIONARY_URL").unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string());
        let search_url =
            env::var("SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        let request_timeout = timeout_from_env("REQUEST_TIMEOUT_SECS", 10)?;
        let connect_timeout = timeout_from_env("CONNECT_TIMEOUT_SECS", 5)?;

        Ok(Config {
            dictionary_url,
            search_url,
            request_timeout,
            connect_timeout,
        })
    }
}

fn timeout_from_env(key: &str, default_secs: u64) -> Result<Duration> {
    let secs = match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", key, e)))?,
        Err(_) => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
