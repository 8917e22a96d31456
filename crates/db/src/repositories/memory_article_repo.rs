//! In-process article repository.
//!
//! Mirrors the MongoDB query semantics closely enough for tests and local
//! development: insertion order is the natural order, substring filters are
//! case-insensitive, and sorting is stable.

use std::sync::Arc;

use articles_core::query::{QueryDescriptor, SortDirection};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::filter::{FIELD_DESC, FIELD_TITLE};
use crate::models::article::{Article, NewArticle};
use crate::repositories::ArticleStore;
use crate::StoreError;

/// Article repository holding records in memory.
///
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct MemoryArticleRepo {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl MemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored articles.
    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleRepo {
    async fn list(&self, query: &QueryDescriptor) -> Result<Vec<Article>, StoreError> {
        let articles = self.articles.read().await;

        let mut matched: Vec<Article> = articles
            .iter()
            .filter(|article| matches(query, article))
            .cloned()
            .collect();

        // Unknown fields compare equal, which keeps the natural order.
        if let Some(sort) = &query.sort {
            matched.sort_by(|a, b| {
                let ordering = field_value(a, &sort.field).cmp(&field_value(b, &sort.field));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);

        Ok(matched.into_iter().skip(skip).take(limit).collect())
    }

    async fn create(&self, input: NewArticle) -> Result<Article, StoreError> {
        let article = Article::from_input(ObjectId::new().to_hex(), input);
        self.articles.write().await.push(article.clone());

        Ok(article)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Article>, StoreError> {
        let id = id.to_hex();
        let articles = self.articles.read().await;

        Ok(articles.iter().find(|article| article.id == id).cloned())
    }

    async fn replace(
        &self,
        id: &ObjectId,
        input: NewArticle,
    ) -> Result<Option<Article>, StoreError> {
        let id = id.to_hex();
        let mut articles = self.articles.write().await;

        let Some(slot) = articles.iter_mut().find(|article| article.id == id) else {
            return Ok(None);
        };
        *slot = Article::from_input(id, input);

        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let id = id.to_hex();
        let mut articles = self.articles.write().await;

        let before = articles.len();
        articles.retain(|article| article.id != id);

        Ok(articles.len() < before)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn matches(query: &QueryDescriptor, article: &Article) -> bool {
    let title_ok = query
        .title_contains
        .as_deref()
        .is_none_or(|needle| contains_ignore_case(&article.title, needle));
    let desc_ok = query
        .desc_contains
        .as_deref()
        .is_none_or(|needle| contains_ignore_case(&article.description, needle));

    title_ok && desc_ok
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Value of a stored field by its document name.
fn field_value<'a>(article: &'a Article, field: &str) -> Option<&'a str> {
    match field {
        "_id" => Some(article.id.as_str()),
        FIELD_TITLE => Some(article.title.as_str()),
        FIELD_DESC => Some(article.description.as_str()),
        "content" => Some(article.content.as_str()),
        _ => None,
    }
}
