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


//! Database schema
//!
//! The store owns a single table and creates it on startup if it is absent.
//! There is no version tracking: the statement is idempotent and existing
//! rows are never touched.

use crate::error::Result;
use sqlx::{Executor, SqlitePool};

/// Create the `books` table if it doesn't exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author VARCHAR(255),
            description VARCHAR(255),
            publishedDate VARCHAR(255),
            title VARCHAR(255)
        )
        "#,
    )
    .await?;

    Ok(())
}
