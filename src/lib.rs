//! SQLite-backed book store with CRUD and cursor pagination.

pub mod config;
pub mod error;
pub mod storage;

pub use config::StoreConfig;
pub use error::{BookshelfError, Result};
pub use storage::{Book, BookDao, BookStore, NewBook, Page};
