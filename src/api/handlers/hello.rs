/*
 * Responsibility
 * - GET /hello (Bearer 必須)
 * - 認証済みかどうかは middleware が判定済み。ここでは CurrentUser を受け取るだけ
 */
use tracing::debug;

use crate::api::extractors::CurrentUser;

pub const GREETING: &str = "Hello Spring Boot Boilerplate";

pub async fn hello(CurrentUser(ctx): CurrentUser) -> &'static str {
    debug!(username = %ctx.username, role = %ctx.role, "hello");
    GREETING
}
