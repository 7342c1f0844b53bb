//! Request extractors that report failures through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections use the `{error, code}` envelope.
///
/// Behaves like [`axum::Json`] but a wrong content type, malformed JSON or a
/// mistyped field becomes a 400 `VALIDATION_ERROR` instead of axum's plain
/// text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
