//! Request extractors whose rejections render as [`AppError`] JSON.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with malformed or incomplete bodies reported as a
/// `VALIDATION_ERROR` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
