use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::models::Role;
use crate::repos::{RepoError, UserRepository};
use crate::services::auth::password::PasswordEncoder;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username and wrong password are indistinguishable on purpose.
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Read-only view of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

/// Checked against when the username is unknown, so both failures pay one bcrypt verify.
const UNKNOWN_USER_PASSWORD: &str = "unknown-user-password";

/// Username / password check against the user store.
///
/// Does not issue tokens; the login flow chains issuance right after.
#[derive(Clone)]
pub struct CredentialAuthenticator {
    users: Arc<dyn UserRepository>,
    encoder: PasswordEncoder,
    // hash of UNKNOWN_USER_PASSWORD at the encoder's cost, built on first miss
    unknown_user_hash: Arc<OnceCell<String>>,
}

impl std::fmt::Debug for CredentialAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialAuthenticator")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl CredentialAuthenticator {
    pub fn new(users: Arc<dyn UserRepository>, encoder: PasswordEncoder) -> Self {
        Self {
            users,
            encoder,
            unknown_user_hash: Arc::new(OnceCell::new()),
        }
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username = %username, "no such user");
            self.verify_unknown_user(password).await;
            return Err(AuthError::AuthenticationFailed);
        };

        if !self
            .encoder
            .matches(password.to_string(), user.password_hash)
            .await
        {
            warn!(username = %username, "password mismatch");
            return Err(AuthError::AuthenticationFailed);
        }

        Ok(Principal {
            username: user.username,
            role: user.role,
        })
    }

    /// Same bcrypt work as a password mismatch; the result is discarded.
    async fn verify_unknown_user(&self, password: &str) {
        let encoder = self.encoder;
        let hash = self
            .unknown_user_hash
            .get_or_try_init(|| encoder.encode(UNKNOWN_USER_PASSWORD.to_string()))
            .await;

        match hash {
            Ok(hash) => {
                encoder.matches(password.to_string(), hash.clone()).await;
            }
            Err(e) => warn!(error = %e, "failed to prepare unknown-user hash"),
        }
    }
}
