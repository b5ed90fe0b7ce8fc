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


use anyhow::Context;
use bookshelf::{BookDao, BookStore, BookshelfError, NewBook, StoreConfig};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookshelf-cli")]
#[command(about = "Bookshelf CLI - manage books in the SQL_DATABASE_URL database", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book and print its id
    Create(BookFields),
    /// Show one book
    Read {
        id: i64,
    },
    /// Replace every field of a book
    Update {
        id: i64,
        #[command(flatten)]
        fields: BookFields,
    },
    /// Remove a book
    Delete {
        id: i64,
    },
    /// Show one page of books ordered by title
    List {
        /// Page token printed by a previous list
        #[arg(short, long)]
        cursor: Option<String>,
    },
}

#[derive(Args)]
struct BookFields {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    author: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    published_date: Option<String>,
}

impl From<BookFields> for NewBook {
    fn from(fields: BookFields) -> Self {
        NewBook {
            author: fields.author,
            description: fields.description,
            published_date: fields.published_date,
            title: fields.title,
        }
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

/// Turn a store error into the message shown to the user
fn report(err: BookshelfError) -> anyhow::Error {
    if err.is_retryable() {
        anyhow::anyhow!("{} (temporary failure, run the command again)", err)
    } else {
        anyhow::anyhow!(err.user_message())
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = StoreConfig::from_env().context("failed to load database settings")?;
    let store = BookStore::connect(&config)
        .await
        .context("failed to open book store")?;

    match cli.command {
        Commands::Create(fields) => {
            let id = store.create(fields.into()).await.map_err(report)?;
            print_json(&serde_json::json!({ "id": id }))?;
        }
        Commands::Read { id } => {
            let book = store.read(id).await.map_err(report)?;
            print_json(&book)?;
        }
        Commands::Update { id, fields } => {
            let book = NewBook::from(fields).with_id(id);
            store.update(&book).await.map_err(report)?;
            print_json(&book)?;
        }
        Commands::Delete { id } => {
            store.delete(id).await.map_err(report)?;
            println!("Deleted book {}", id);
        }
        Commands::List { cursor } => {
            let page = store.list(cursor.as_deref()).await.map_err(report)?;
            print_json(&page)?;
        }
    }

    store.close().await?;
    Ok(())
}
