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


//! Database query functions
//!
//! One function per SQL statement against the `books` table. Every value is
//! bound as a parameter; no caller input is ever spliced into SQL text.
//!
//! # Query Patterns
//! - Single-row statements run directly on the pool
//! - Listing statements take any executor so they can share a transaction

use crate::error::Result;
use crate::storage::models::{Book, NewBook};
use sqlx::{Executor, Sqlite, SqlitePool};

/// Insert a new book
///
/// Returns the id the database assigned to the row.
pub async fn insert_book(pool: &SqlitePool, book: &NewBook) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO books (author, description, publishedDate, title)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&book.author)
    .bind(&book.description)
    .bind(&book.published_date)
    .bind(&book.title)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find book by ID
pub async fn find_book_by_id(pool: &SqlitePool, book_id: i64) -> Result<Option<Book>> {
    let book = sqlx::query_as::<_, Book>(
        "SELECT id, author, description, publishedDate, title FROM books WHERE id = ?",
    )
    .bind(book_id)
    .fetch_optional(pool)
    .await?;

    Ok(book)
}

/// Overwrite all descriptive fields of an existing book
///
/// Returns the number of rows changed (0 when the id doesn't exist).
pub async fn update_book(pool: &SqlitePool, book: &Book) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE books SET
            author = ?, description = ?, publishedDate = ?, title = ?
        WHERE id = ?
        "#,
    )
    .bind(&book.author)
    .bind(&book.description)
    .bind(&book.published_date)
    .bind(&book.title)
    .bind(book.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a book
///
/// Returns the number of rows removed (0 when the id doesn't exist).
pub async fn delete_book(pool: &SqlitePool, book_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(book_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// List books ordered by title with limit/offset
pub async fn list_books<'e, E>(executor: E, limit: i64, offset: i64) -> Result<Vec<Book>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, author, description, publishedDate, title
        FROM books
        ORDER BY title ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;

    Ok(books)
}

/// Count total books
pub async fn count_books<'e, E>(executor: E) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(executor)
        .await?;

    Ok(count)
}
