//! 未認証アクセスの終端処理。
//!
//! 保護されたリソースに認証なしで来た request に 401 を返す。body は
//! `ApiExceptionResponse` (message / status / time)。

use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::services::messages::{Locale, MessageKey, Messages};

pub fn unauthenticated(locale: Locale) -> AppError {
    AppError::Unauthenticated(Messages::get(
        locale,
        MessageKey::FullAuthenticationRequired,
        &[],
    ))
}

pub fn commence(locale: Locale) -> Response {
    unauthenticated(locale).into_response()
}
