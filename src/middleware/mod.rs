/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: JWT filter + access rules, http: request id / trace / limit / timeout
 */
pub mod auth;
pub mod http;
