/*
 * Responsibility
 * - URL 構造を定義
 * - 認証が必要かどうかはここでは決めない (middleware::auth::rules が path で判定する)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::handlers::{
    auth::{login, register},
    health::health,
    hello::hello,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/hello", get(hello))
        .route("/actuator/health", get(health))
}
