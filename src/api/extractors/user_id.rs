//! User id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::UserId;
use crate::errors::AppError;

/// The `{id}` path segment, parsed as a [`UserId`].
///
/// Non-numeric ids are rejected with `AppError::Validation` so the
/// client gets the standard error body instead of axum's plain text.
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<UserId>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(UserIdPath(id))
    }
}
