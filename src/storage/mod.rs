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


//! Database storage and models
//!
//! This module handles all database operations using SQLite through sqlx.
//!
//! # Database Schema
//! - books: id, author, description, publishedDate, title
//!
//! # Usage Example
//! ```no_run
//! use bookshelf::storage::{BookDao, BookStore, NewBook};
//! use bookshelf::StoreConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = BookStore::connect(&StoreConfig::from_env()?).await?;
//!
//! let id = store.create(NewBook::titled("The Hobbit").author("J.R.R. Tolkien")).await?;
//! println!("{:?}", store.read(id).await?);
//!
//! let mut cursor: Option<String> = None;
//! loop {
//!     let page = store.list(cursor.as_deref()).await?;
//!     for book in &page.items {
//!         println!("{:?}", book.title);
//!     }
//!     match page.next_page_token {
//!         Some(token) => cursor = Some(token),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use database::Database;
pub use models::{Book, NewBook};
pub use pagination::{Page, PAGE_SIZE};
pub use store::{BookDao, BookStore};
