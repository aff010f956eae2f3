//! 请求提取器
//!
//! Rejections are turned into [`AppError`] so every failure shares the JSON
//! error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;
use shared::{AppError, DataRequest, ErrorCode};

/// `{ "data": T }` request body
///
/// An empty body or a missing `data` yields `T::default()`, so the draft's own
/// validation reports what is missing.
#[derive(Debug, Clone)]
pub struct DataBody<T>(pub T);

impl<S, T> FromRequest<S> for DataBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(format!("Failed to read body: {e}")))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(DataBody(T::default()));
        }

        let envelope: DataRequest<T> = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid JSON body: {e}"))
        })?;
        Ok(DataBody(envelope.into_draft()))
    }
}

/// Numeric id path segment
///
/// A segment that is not an integer cannot name any row, so it is reported
/// like an unknown path.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        let not_found = || {
            AppError::with_message(ErrorCode::NotFound, format!("Path not found: {path}"))
        };
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;
        raw.parse::<i64>().map(PathId).map_err(|_| not_found())
    }
}
