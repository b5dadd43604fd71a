use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::api::dto::Validate;
use crate::error::AppError;
use crate::services::messages::{Locale, MessageKey, Messages};

/// JSON body that passed its [`Validate`] constraints.
///
/// - unreadable body -> `AppError::InvalidBody`
/// - constraint violations -> `AppError::Validation` with every localized message
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(req.headers());

        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            warn!(error = %rejection.body_text(), "request body rejected");
            AppError::InvalidBody(Messages::get(locale, MessageKey::MalformedRequest, &[]))
        })?;

        let violations = value.validate();
        if !violations.is_empty() {
            let messages: Vec<String> = violations
                .into_iter()
                .map(|key| Messages::get(locale, key, &[]))
                .collect();
            warn!(errors = ?messages, "validation errors");
            return Err(AppError::Validation(messages));
        }

        Ok(ValidJson(value))
    }
}
