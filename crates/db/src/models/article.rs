//! Article entity and request DTOs.

use serde::{Deserialize, Serialize};

/// An article as returned to clients.
///
/// `id` is the hex form of the document's ObjectId.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub content: String,
}

/// Payload for creating or replacing an article.
///
/// Any `_id` sent by the client is ignored. Missing text fields default to
/// empty strings.
///
/// `Title` is accepted for clients of the earlier service, which wrote that
/// key. Responses only ever carry `title`, so such clients must read the
/// lowercase key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewArticle {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub content: String,
}

impl Article {
    /// Combine an identifier with a payload.
    pub fn from_input(id: String, input: NewArticle) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            content: input.content,
        }
    }
}
