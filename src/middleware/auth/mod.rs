/*
 * Responsibility
 * - 認証 (JWT filter) と認可 (access rules) の middleware
 * - 適用順: jwt_filter → authorize → handler
 */
pub mod authorization;
pub mod entry_point;
pub mod jwt_filter;
pub mod rules;

use axum::{Router, middleware};

use crate::state::AppState;

pub use jwt_filter::JwtAuthenticationFilter;
pub use rules::AccessRules;

pub const TOKEN_PREFIX: &str = "Bearer ";

/// Apply authentication + authorization to every route of `router` (fallback included).
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum の layer は後から積んだものが外側 = 先に実行される
    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authorization::authorize,
        ))
        .layer(middleware::from_fn_with_state(state, jwt_filter::jwt_filter))
}
