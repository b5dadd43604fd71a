//! In-process user store.
//!
//! Used when no `DATABASE_URL` is configured, and by the test suite.
//! Enforces the same uniqueness rules as the `users` table (username, email).

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{NewUser, User};
use crate::repos::error::{RepoError, RepoResult};
use crate::repos::user_repo::UserRepository;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    // keyed by username
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> RepoResult<bool> {
        Ok(self.users.read().await.values().any(|u| u.email == email))
    }

    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn save(&self, user: NewUser) -> RepoResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.username) || users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Conflict);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = User {
            id,
            name: user.name,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        };
        users.insert(stored.username.clone(), stored.clone());

        Ok(stored)
    }
}
