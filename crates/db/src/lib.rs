//! Storage layer for articles.
//!
//! Exposes the [`ArticleStore`] collaborator trait with a MongoDB-backed and
//! an in-memory implementation, plus the translation of a
//! [`QueryDescriptor`](articles_core::query::QueryDescriptor) into Mongo
//! filter and find options.

use mongodb::options::ClientOptions;
use mongodb::Client;

pub mod filter;
pub mod models;
pub mod repositories;

pub use mongodb::bson::oid::ObjectId;
pub use repositories::{ArticleStore, MemoryArticleRepo, MongoArticleRepo};

/// Application name reported to the MongoDB server.
const APP_NAME: &str = "articles-api";

/// Error raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Create a MongoDB client from a connection URI.
///
/// The driver pools connections internally; the returned client is cheap to
/// clone and share.
pub async fn create_client(database_url: &str) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(database_url).await?;
    options.app_name = Some(APP_NAME.to_string());

    Ok(Client::with_options(options)?)
}
