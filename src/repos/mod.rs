/*
 * Responsibility
 * - user store の公開インターフェース
 * - Postgres 実装と in-memory 実装を同じ trait の後ろに置く
 */
pub mod error;
pub mod memory_user_repo;
pub mod user_repo;

pub use error::{RepoError, RepoResult};
pub use memory_user_repo::InMemoryUserRepository;
pub use user_repo::{PgUserRepository, UserRepository};
