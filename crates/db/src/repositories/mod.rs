//! Storage collaborators for articles.
//!
//! Handlers depend on the [`ArticleStore`] trait only; the concrete backend
//! is chosen at startup and injected through application state.

use articles_core::query::QueryDescriptor;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::article::{Article, NewArticle};
use crate::StoreError;

pub mod memory_article_repo;
pub mod mongo_article_repo;

pub use memory_article_repo::MemoryArticleRepo;
pub use mongo_article_repo::MongoArticleRepo;

/// One storage operation per request, executed against a document store.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// List articles matching the descriptor's predicates, in its sort order,
    /// after skipping `skip` records and capped at `limit`.
    async fn list(&self, query: &QueryDescriptor) -> Result<Vec<Article>, StoreError>;

    /// Insert a new article under a freshly generated id.
    async fn create(&self, input: NewArticle) -> Result<Article, StoreError>;

    /// Find an article by id.
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Article>, StoreError>;

    /// Replace the title, description and content of an article.
    ///
    /// Returns `None` if no article with the given id exists.
    async fn replace(&self, id: &ObjectId, input: NewArticle)
        -> Result<Option<Article>, StoreError>;

    /// Delete an article. Returns `true` if a record was removed.
    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
