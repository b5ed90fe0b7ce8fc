// Bookshelf - SQLite Book Store
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Database connection and management
//!
//! This module owns the connection pool every store operation draws from.
//! The pool is created once at startup and handed to the store; it lives
//! until the process exits or [`Database::close`] is called.
//!
//! # SQLite Configuration
//! - WAL mode for better concurrency
//! - Foreign keys enabled
//! - Normal synchronous mode (balance safety/speed)
//! - 30 second busy timeout so writers wait instead of failing on a lock

use crate::config::StoreConfig;
use crate::error::{BookshelfError, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous},
    ConnectOptions,
};
use std::str::FromStr;
use std::time::Duration;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Database manager - handles connection pooling
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    url: String,
}

impl Database {
    /// Open a connection pool for the configured database URL
    ///
    /// File databases are created if they don't exist yet. An in-memory URL
    /// gets a single, never-recycled connection, since every SQLite memory
    /// connection is its own database.
    ///
    /// # Errors
    /// Returns `StorageUnavailable` if:
    /// - The URL is not a `sqlite:` URL or can't be parsed
    /// - The database can't be opened
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        if !config.database_url.starts_with("sqlite:") {
            return Err(BookshelfError::unavailable(
                "unsupported database URL",
                "expected a sqlite: URL",
            ));
        }

        let connect_opts = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| BookshelfError::unavailable("invalid database URL", e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(30))
            .disable_statement_logging();

        let pool_opts = if is_in_memory(&config.database_url) {
            single_connection_pool()
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_opts
            .acquire_timeout(config.acquire_timeout)
            .connect_with(connect_opts)
            .await
            .map_err(|e| BookshelfError::unavailable("failed to open connection pool", e))?;

        tracing::info!(
            url = %config.database_url,
            max_connections = config.max_connections,
            "connected to book database"
        );

        Ok(Self {
            pool,
            url: config.database_url.clone(),
        })
    }

    /// Create in-memory database for testing
    ///
    /// # Errors
    /// Returns `StorageUnavailable` if the connection can't be opened
    pub async fn new_in_memory() -> Result<Self> {
        let connect_opts = SqliteConnectOptions::from_str(IN_MEMORY_URL)
            .map_err(|e| BookshelfError::unavailable("invalid database URL", e))?
            .foreign_keys(true)
            .disable_statement_logging();

        let pool = single_connection_pool()
            .connect_with(connect_opts)
            .await
            .map_err(|e| BookshelfError::unavailable("failed to open in-memory database", e))?;

        Ok(Self {
            pool,
            url: IN_MEMORY_URL.to_string(),
        })
    }

    /// Get reference to the connection pool
    ///
    /// Use this to execute queries directly on the pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Connection URL this database was opened with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close database and release all connections
    ///
    /// This will wait for all active connections to finish before closing.
    pub async fn close(self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

/// Pool holding exactly one connection that is never dropped for idleness or age
fn single_connection_pool() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new_in_memory().await.expect("Failed to create in-memory database");

        // Verify database is accessible
        let result: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(db.pool())
            .await
            .expect("Failed to query database");

        assert_eq!(result, 1);
        assert_eq!(db.url(), "sqlite::memory:");
    }

    #[tokio::test]
    async fn test_connect_creates_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("books.db");
        let config = StoreConfig::new(format!("sqlite://{}", path.display()));

        let db = Database::connect(&config).await.expect("Failed to connect");
        assert!(path.exists(), "database file was not created");

        db.close().await.expect("Failed to close");
    }

    #[tokio::test]
    async fn test_connect_rejects_non_sqlite_url() {
        let config = StoreConfig::new("mysql://localhost/books");
        let err = Database::connect(&config).await.unwrap_err();

        assert!(matches!(err, BookshelfError::StorageUnavailable(_)));
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file.db?mode=memory"));
        assert!(!is_in_memory("sqlite://books.db"));
    }
}
