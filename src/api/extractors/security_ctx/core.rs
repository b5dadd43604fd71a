use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::middleware::auth::entry_point;
use crate::services::messages::Locale;

use super::SecurityContext;

/// Handler で、 SecurityContext を受け取るための extractor
/// JWT filter が SecurityContext を request.extensions() に insert 済みである前提
/// 見つからない場合は entry point と同じ 401 を返す
pub struct CurrentUser(pub SecurityContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SecurityContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| entry_point::unauthenticated(Locale::from_headers(&parts.headers)))
    }
}
