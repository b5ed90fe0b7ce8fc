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


//! Book data-access object
//!
//! [`BookStore`] turns the five book operations into statements from
//! [`crate::storage::queries`]. Each call draws one connection from the pool
//! for its duration; nothing is cached between calls.

use crate::config::StoreConfig;
use crate::error::{BookshelfError, Result};
use crate::storage::database::Database;
use crate::storage::models::{Book, NewBook};
use crate::storage::pagination::{self, Page, PAGE_SIZE};
use crate::storage::{queries, schema};
use async_trait::async_trait;

/// Book persistence operations
///
/// Callers that don't care about the backing store can hold a `dyn BookDao`.
#[async_trait]
pub trait BookDao: Send + Sync {
    /// Store a new book and return its assigned id
    async fn create(&self, book: NewBook) -> Result<i64>;

    /// Fetch a book by id
    async fn read(&self, id: i64) -> Result<Book>;

    /// Replace every descriptive field of `book.id`; unknown ids are ignored
    async fn update(&self, book: &Book) -> Result<()>;

    /// Remove a book; unknown ids are ignored
    async fn delete(&self, id: i64) -> Result<()>;

    /// One page of books ordered by title, starting at `cursor`
    async fn list(&self, cursor: Option<&str>) -> Result<Page<Book>>;
}

/// SQLite-backed [`BookDao`]
#[derive(Debug, Clone)]
pub struct BookStore {
    db: Database,
}

impl BookStore {
    /// Open the configured database and make sure the `books` table exists
    ///
    /// # Errors
    /// Returns `StorageUnavailable` if the pool can't be established or the
    /// table can't be created.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let db = Database::connect(config).await?;
        Self::open(db).await
    }

    /// Wrap an existing database, creating the `books` table if needed
    pub async fn open(db: Database) -> Result<Self> {
        schema::ensure_schema(db.pool())
            .await
            .map_err(|e| BookshelfError::unavailable("failed to create books table", e))?;

        tracing::info!(url = %db.url(), "book store ready");
        Ok(Self { db })
    }

    /// Underlying database handle
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Release every pooled connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await
    }

    /// Total number of stored books
    pub async fn count(&self) -> Result<i64> {
        queries::count_books(self.db.pool()).await
    }
}

#[async_trait]
impl BookDao for BookStore {
    async fn create(&self, book: NewBook) -> Result<i64> {
        let id = queries::insert_book(self.db.pool(), &book).await?;
        tracing::debug!(book_id = id, "created book");
        Ok(id)
    }

    async fn read(&self, id: i64) -> Result<Book> {
        queries::find_book_by_id(self.db.pool(), id)
            .await?
            .ok_or(BookshelfError::BookNotFound(id))
    }

    async fn update(&self, book: &Book) -> Result<()> {
        let rows = queries::update_book(self.db.pool(), book).await?;
        tracing::debug!(book_id = book.id, rows_affected = rows, "updated book");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let rows = queries::delete_book(self.db.pool(), id).await?;
        tracing::debug!(book_id = id, rows_affected = rows, "deleted book");
        Ok(())
    }

    async fn list(&self, cursor: Option<&str>) -> Result<Page<Book>> {
        let offset = pagination::parse_cursor(cursor)?;

        // Page and count share one snapshot so the token agrees with the rows returned.
        let mut tx = self.db.pool().begin().await?;
        let items = queries::list_books(&mut *tx, PAGE_SIZE, offset).await?;
        let total = queries::count_books(&mut *tx).await?;
        tx.commit().await?;

        let next_page_token = pagination::next_cursor(offset, total);
        tracing::debug!(
            offset,
            returned = items.len(),
            total,
            has_more = next_page_token.is_some(),
            "listed books"
        );

        Ok(Page {
            items,
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> BookStore {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        BookStore::open(db).await.expect("Failed to open store")
    }

    #[tokio::test]
    async fn test_read_missing_book_is_not_found() {
        let store = store().await;

        let err = store.read(12345).await.unwrap_err();
        assert!(matches!(err, BookshelfError::BookNotFound(12345)));
    }

    #[tokio::test]
    async fn test_count_tracks_creates_and_deletes() {
        let store = store().await;
        assert_eq!(store.count().await.unwrap(), 0);

        let id = store.create(NewBook::titled("One")).await.unwrap();
        store.create(NewBook::titled("Two")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        store.delete(id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_past_the_end_is_empty_last_page() {
        let store = store().await;
        store.create(NewBook::titled("Only")).await.unwrap();

        let page = store.list(Some("50")).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.is_last());
    }

    #[tokio::test]
    async fn test_invalid_cursor_checked_before_query() {
        let store = store().await;

        let err = store.list(Some("ten")).await.unwrap_err();
        assert!(matches!(err, BookshelfError::InvalidCursor { .. }));
    }
}
