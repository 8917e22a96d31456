//! Request extractors that reject with [`AppError`] instead of Axum's
//! plain-text rejections.

use articles_core::error::CoreError;
use articles_db::ObjectId;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

const INVALID_ID: &str = "Invalid ID format";

/// Article identifier taken from the `{id}` path segment.
///
/// Anything that is not a 24-digit hex ObjectId is rejected with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub ObjectId);

impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Core(CoreError::Validation(INVALID_ID.into())))?;

        ObjectId::parse_str(&raw)
            .map(Self)
            .map_err(|_| AppError::Core(CoreError::Validation(INVALID_ID.into())))
    }
}

/// JSON request body. Malformed payloads are rejected with a 400
/// `BAD_REQUEST` error body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "Rejected request body");
                AppError::BadRequest("Invalid request body".into())
            })?;

        Ok(Self(value))
    }
}
