/*
 * Responsibility
 * - POST /login, POST /register
 * - ValidJson で body を受けて検証済みの DTO を service に渡すだけ (ロジックは置かない)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::auth::{LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse},
        extractors::{RequestLocale, ValidJson},
    },
    error::AppError,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state
        .login
        .login(&req.username, &req.password, locale)
        .await?;

    Ok(Json(LoginResponse { token }))
}

pub async fn register(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidJson(req): ValidJson<RegistrationRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AppError> {
    let message = state.users.registration(req.into(), locale).await?;

    Ok((StatusCode::CREATED, Json(RegistrationResponse { message })))
}
