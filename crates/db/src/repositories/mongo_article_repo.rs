//! MongoDB-backed article repository.

use articles_core::query::QueryDescriptor;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::filter::{filter_document, find_options};
use crate::models::article::{Article, NewArticle};
use crate::repositories::ArticleStore;
use crate::StoreError;

/// Stored shape of an article.
#[derive(Debug, Serialize, Deserialize)]
struct ArticleDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    content: String,
}

impl ArticleDocument {
    fn new(id: ObjectId, input: NewArticle) -> Self {
        Self {
            id,
            title: input.title,
            desc: input.description,
            content: input.content,
        }
    }
}

impl From<ArticleDocument> for Article {
    fn from(document: ArticleDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            title: document.title,
            description: document.desc,
            content: document.content,
        }
    }
}

/// Article repository over a single MongoDB collection.
#[derive(Clone)]
pub struct MongoArticleRepo {
    database: Database,
    collection: Collection<ArticleDocument>,
}

impl MongoArticleRepo {
    /// Use `collection` inside `database` of an existing client.
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection::<ArticleDocument>(collection);

        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl ArticleStore for MongoArticleRepo {
    async fn list(&self, query: &QueryDescriptor) -> Result<Vec<Article>, StoreError> {
        let filter = filter_document(query);
        tracing::debug!(?filter, skip = query.skip, limit = query.limit, "Listing articles");

        let documents: Vec<ArticleDocument> = self
            .collection
            .find(filter)
            .with_options(find_options(query))
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Article::from).collect())
    }

    async fn create(&self, input: NewArticle) -> Result<Article, StoreError> {
        let document = ArticleDocument::new(ObjectId::new(), input);
        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Article>, StoreError> {
        let document = self.collection.find_one(doc! { "_id": *id }).await?;

        Ok(document.map(Article::from))
    }

    async fn replace(
        &self,
        id: &ObjectId,
        input: NewArticle,
    ) -> Result<Option<Article>, StoreError> {
        let document = ArticleDocument::new(*id, input);
        let result = self
            .collection
            .replace_one(doc! { "_id": *id }, &document)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(document.into()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
