/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - JWT filter が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - request ごとに生成され、request と一緒に破棄される (session なし)
 */
use crate::models::Role;

/// Authenticated principal of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    pub username: String,
    pub role: Role,
}

impl SecurityContext {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}
