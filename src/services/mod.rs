/*
 * Responsibility
 * - ビジネスロジック (token, 認証, 登録, メッセージ)
 * - factory: Config から依存を組み立てて AppState を作る
 */
pub mod auth;
pub mod factory;
pub mod messages;
pub mod user;
