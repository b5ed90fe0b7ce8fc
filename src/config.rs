//! Store configuration
//!
//! Settings are read from the process environment after loading an optional
//! `.env` file. Only `SQL_DATABASE_URL` is required.
//!
//! # Environment
//! - `SQL_DATABASE_URL` - SQLite connection URL (`sqlite://books.db`, `sqlite::memory:`)
//! - `SQL_MAX_CONNECTIONS` - pool size (default 5)
//! - `SQL_ACQUIRE_TIMEOUT_SECS` - seconds to wait for a pooled connection (default 30)

use crate::error::{BookshelfError, Result};
use std::time::Duration;

pub const DATABASE_URL_ENV: &str = "SQL_DATABASE_URL";
pub const MAX_CONNECTIONS_ENV: &str = "SQL_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_ENV: &str = "SQL_ACQUIRE_TIMEOUT_SECS";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a [`crate::storage::BookStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database connection URL
    pub database_url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// How long an operation waits for a free connection
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    /// Create a config for `database_url` with default pool settings
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Load config from `.env` (if present) and the process environment
    ///
    /// # Errors
    /// Returns `StorageUnavailable` if `SQL_DATABASE_URL` is missing or empty,
    /// or if an optional pool setting is not a number.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; real deployments set the environment directly.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                BookshelfError::StorageUnavailable(format!("{} is not set", DATABASE_URL_ENV))
            })?;

        let mut config = Self::new(database_url);

        if let Some(raw) = lookup(MAX_CONNECTIONS_ENV) {
            config.max_connections = parse_setting(MAX_CONNECTIONS_ENV, &raw)?;
        }
        if let Some(raw) = lookup(ACQUIRE_TIMEOUT_ENV) {
            config.acquire_timeout = Duration::from_secs(parse_setting(ACQUIRE_TIMEOUT_ENV, &raw)?);
        }

        Ok(config)
    }

    /// Override the pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| BookshelfError::unavailable(&format!("invalid {}={:?}", key, raw), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = StoreConfig::from_lookup(lookup_from(&[(DATABASE_URL_ENV, "sqlite://books.db")]))
            .expect("config should load");

        assert_eq!(config.database_url, "sqlite://books.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_pool_settings_override() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_ENV, "sqlite::memory:"),
            (MAX_CONNECTIONS_ENV, "12"),
            (ACQUIRE_TIMEOUT_ENV, " 3 "),
        ]))
        .expect("config should load");

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_url_is_unavailable() {
        let err = StoreConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, BookshelfError::StorageUnavailable(_)));

        let err = StoreConfig::from_lookup(lookup_from(&[(DATABASE_URL_ENV, "   ")])).unwrap_err();
        assert!(matches!(err, BookshelfError::StorageUnavailable(_)));
    }

    #[test]
    fn test_invalid_pool_size_is_unavailable() {
        let err = StoreConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_ENV, "sqlite::memory:"),
            (MAX_CONNECTIONS_ENV, "lots"),
        ]))
        .unwrap_err();

        assert!(matches!(err, BookshelfError::StorageUnavailable(_)));
        assert!(err.to_string().contains(MAX_CONNECTIONS_ENV));
    }
}
