use std::env;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Number of tags returned per list page.
    pub page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
            page_size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `ADDRESS`, `PORT` and `PAGE_SIZE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for missing or malformed values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT").map(|raw| raw.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(err)) => {
                log::warn!("Ignoring invalid PORT: {err}");
                defaults.port
            }
            None => defaults.port,
        };

        let page_size = match lookup("PAGE_SIZE").map(|raw| raw.parse::<usize>()) {
            Some(Ok(size)) if size > 0 => size,
            Some(_) => {
                log::warn!("Ignoring invalid PAGE_SIZE");
                defaults.page_size
            }
            None => defaults.page_size,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            page_size,
        }
    }
}
