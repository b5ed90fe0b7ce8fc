//! Database models for Bookshelf
//!
//! # SQLite Adaptations
//! - All descriptive fields are nullable TEXT, mapped to `Option<String>`
//! - `publishedDate` keeps its camelCase column name; Rust code uses `published_date`

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored book
///
/// `id` is assigned by the database when the book is created and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub author: Option<String>,
    pub description: Option<String>,
    /// Free-form date string, not parsed
    #[sqlx(rename = "publishedDate")]
    pub published_date: Option<String>,
    /// Sort key for listing
    pub title: Option<String>,
}

impl Book {
    /// Copy of the descriptive fields, without the id
    pub fn fields(&self) -> NewBook {
        NewBook {
            author: self.author.clone(),
            description: self.description.clone(),
            published_date: self.published_date.clone(),
            title: self.title.clone(),
        }
    }
}

/// Book for insertion (without id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub author: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub title: Option<String>,
}

impl NewBook {
    /// Create a book with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn published_date(mut self, published_date: impl Into<String>) -> Self {
        self.published_date = Some(published_date.into());
        self
    }

    /// Attach a database-assigned id
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            author: self.author,
            description: self.description,
            published_date: self.published_date,
            title: self.title,
        }
    }
}
