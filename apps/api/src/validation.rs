//! Structural request validation.
//!
//! Field presence and primitive types come from the serde derives on the
//! request models; this extractor only reshapes axum's rejection into the
//! API's error envelope. No semantic checks (email format, empty names).

use axum::extract::FromRequest;

use crate::errors::AppError;

/// Drop-in replacement for `axum::Json` whose rejection is an `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
