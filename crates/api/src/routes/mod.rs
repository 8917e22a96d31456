pub mod articles;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// /                       landing page
/// /health                 service and store health
/// /articles               list (GET)
/// /article                create (POST)
/// /article/{id}           get, replace, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home_page))
        .merge(health::router())
        .merge(articles::router())
}
