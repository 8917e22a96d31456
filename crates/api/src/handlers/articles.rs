//! Handlers for the article resource.
//!
//! Each handler performs exactly one store operation. Listing parameters are
//! translated by [`QueryDescriptor::from_params`], which never rejects input.

use std::collections::HashMap;

use articles_core::error::CoreError;
use articles_core::query::QueryDescriptor;
use articles_db::models::article::NewArticle;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ArticleId, JsonBody};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: &ArticleId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id: id.0.to_hex(),
    })
}

/// GET /articles
///
/// List articles with optional `title`/`desc` substring filters, `sort` +
/// `order`, and `page` + `limit` pagination.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    let query = QueryDescriptor::from_params(&params);
    let articles = state.store.list(&query).await?;

    tracing::debug!(
        page = query.page,
        limit = query.limit,
        count = articles.len(),
        "Articles listed",
    );

    Ok(Json(DataResponse { data: articles }))
}

/// POST /article
///
/// Create an article. The identifier is assigned by the store.
pub async fn create_article(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewArticle>,
) -> AppResult<impl IntoResponse> {
    let article = state.store.create(input).await?;

    tracing::info!(article_id = %article.id, "Article created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /article/{id}
pub async fn get_article(
    State(state): State<AppState>,
    id: ArticleId,
) -> AppResult<impl IntoResponse> {
    let article = state
        .store
        .find_by_id(&id.0)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(DataResponse { data: article }))
}

/// PUT /article/{id}
///
/// Replace the title, description and content of an existing article.
pub async fn update_article(
    State(state): State<AppState>,
    id: ArticleId,
    JsonBody(input): JsonBody<NewArticle>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .store
        .replace(&id.0, input)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(article_id = %article.id, "Article updated");

    Ok(Json(DataResponse { data: article }))
}

/// DELETE /article/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    id: ArticleId,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(&id.0).await? {
        return Err(not_found(&id));
    }

    tracing::info!(article_id = %id.0, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}
