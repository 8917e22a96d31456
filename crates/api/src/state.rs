use std::sync::Arc;

use articles_db::ArticleStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Article storage backend.
    pub store: Arc<dyn ArticleStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
