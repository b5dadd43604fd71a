/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 *   - auth 系 (registration / bad credentials / unauthenticated) -> ApiExceptionResponse
 *   - validation 系 -> ValidationErrorResponse (message が配列)
 * - RepoError などの下位エラーを統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::messages::{Locale, MessageKey, Messages};

#[derive(Debug, Serialize)]
pub struct ApiExceptionResponse {
    pub message: String,
    pub status: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub status: String,
    pub time: DateTime<Utc>,
    pub message: Vec<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Field constraint violations, already localized, in field order.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),
    /// Duplicate email / username.
    #[error("registration rejected: {0}")]
    Registration(String),
    #[error("bad credentials: {0}")]
    BadCredentials(String),
    /// Protected resource without a valid authentication.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    /// Body could not be parsed as the expected JSON document.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("internal server error")]
    Internal,
}

/// `400 Bad Request` -> `BAD_REQUEST`
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace([' ', '-'], "_")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let time = Utc::now();

        let (status, message) = match self {
            AppError::Validation(message) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ValidationErrorResponse {
                    status: status_name(status),
                    time,
                    message,
                };
                return (status, Json(body)).into_response();
            }
            AppError::Registration(message) => (StatusCode::BAD_REQUEST, message),
            AppError::InvalidBody(message) => (StatusCode::BAD_REQUEST, message),
            AppError::BadCredentials(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::Unauthenticated(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Messages::get(Locale::DEFAULT, MessageKey::InternalError, &[]),
            ),
        };

        let body = ApiExceptionResponse {
            message,
            status: status_name(status),
            time,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = ?e, "user store failure");
        AppError::Internal
    }
}
