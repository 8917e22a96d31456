//! Route definitions for the article resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes, mounted at the root.
///
/// ```text
/// GET    /articles        -> list_articles
/// POST   /article         -> create_article
/// GET    /article/{id}    -> get_article
/// PUT    /article/{id}    -> update_article
/// DELETE /article/{id}    -> delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles", get(articles::list_articles))
        .route("/article", post(articles::create_article))
        .route(
            "/article/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
}
