use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{NewUser, Role};
use crate::repos::{RepoError, UserRepository};
use crate::services::auth::password::PasswordEncoder;
use crate::services::messages::{Locale, MessageKey, Messages};
use crate::services::user::validation::UserValidationService;

/// Registration input, already shape-validated by the caller.
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("username", &self.username)
            .finish()
    }
}

/// Registration: duplicate checks -> hash -> save as `USER`.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    encoder: PasswordEncoder,
    validation: UserValidationService,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, encoder: PasswordEncoder) -> Self {
        let validation = UserValidationService::new(users.clone());
        Self {
            users,
            encoder,
            validation,
        }
    }

    /// Returns the localized success message (contains the username).
    pub async fn registration(
        &self,
        req: Registration,
        locale: Locale,
    ) -> Result<String, AppError> {
        self.validation
            .validate_user(&req.email, &req.username, locale)
            .await?;

        let password_hash = self.encoder.encode(req.password).await.map_err(|e| {
            warn!(error = %e, "failed to hash password");
            AppError::Internal
        })?;

        let email = req.email.clone();
        let new_user = NewUser {
            name: req.name,
            username: req.username,
            email: req.email,
            password_hash,
            role: Role::User,
        };

        let user = match self.users.save(new_user).await {
            Ok(user) => user,
            // Lost a race against a concurrent registration after the checks passed
            Err(RepoError::Conflict) => {
                warn!("unique constraint hit while saving user");
                return Err(self.conflict_error(&email, locale).await);
            }
            Err(e) => return Err(e.into()),
        };

        info!(username = %user.username, "registered successfully");

        Ok(Messages::get(
            locale,
            MessageKey::RegistrationSuccessful,
            &[&user.username],
        ))
    }

    /// Email still wins over username when the duplicate only shows up at save time.
    async fn conflict_error(&self, email: &str, locale: Locale) -> AppError {
        let key = match self.users.exists_by_email(email).await {
            Ok(true) => MessageKey::EmailAlreadyExists,
            Ok(false) => MessageKey::UsernameAlreadyExists,
            Err(e) => return e.into(),
        };
        AppError::Registration(Messages::get(locale, key, &[]))
    }
}
