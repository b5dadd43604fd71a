/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - UserRepository trait: 認証 / 登録が必要とする lookup だけを公開する
 * - DB エラーは RepoError に変換して返す (unique violation -> Conflict)
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::models::{NewUser, Role, User};
use crate::repos::error::{RepoError, RepoResult};

/// Credential and role lookup by username, plus the existence checks used by registration.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool>;

    async fn exists_by_username(&self, username: &str) -> RepoResult<bool>;

    async fn save(&self, user: NewUser) -> RepoResult<User>;
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
    password: String,
    user_role: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepoError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.user_role)
            .ok_or_else(|| RepoError::InvalidRow(format!("unknown user_role '{}'", row.user_role)))?;

        Ok(User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            password_hash: row.password,
            role,
        })
    }
}

#[derive(Clone, Debug)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, username, email, password, user_role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(exists)
    }

    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(exists)
    }

    async fn save(&self, user: NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, username, email, password, user_role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, username, email, password, user_role
            "#,
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        User::try_from(row)
    }
}
