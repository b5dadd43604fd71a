/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth_filter / access_rules: middleware 用
 *   - login / users: handler 用
 * - Clone 前提で持つ (内部は Arc で Clone cheap)
 * - 組み立ては services::factory に任せる
 */
use std::sync::Arc;

use crate::middleware::auth::{AccessRules, JwtAuthenticationFilter};
use crate::services::auth::LoginService;
use crate::services::user::UserService;

#[derive(Clone)]
pub struct AppState {
    pub auth_filter: Arc<JwtAuthenticationFilter>,
    pub access_rules: Arc<AccessRules>,
    pub login: Arc<LoginService>,
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(
        auth_filter: Arc<JwtAuthenticationFilter>,
        access_rules: Arc<AccessRules>,
        login: Arc<LoginService>,
        users: Arc<UserService>,
    ) -> Self {
        Self {
            auth_filter,
            access_rules,
            login,
            users,
        }
    }
}
