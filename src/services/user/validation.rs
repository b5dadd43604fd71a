use std::sync::Arc;

use tracing::warn;

use crate::error::AppError;
use crate::repos::UserRepository;
use crate::services::messages::{Locale, MessageKey, Messages};

/// Duplicate checks for registration: email first, then username. First hit wins.
#[derive(Clone)]
pub struct UserValidationService {
    users: Arc<dyn UserRepository>,
}

impl UserValidationService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn validate_user(
        &self,
        email: &str,
        username: &str,
        locale: Locale,
    ) -> Result<(), AppError> {
        self.check_email(email, locale).await?;
        self.check_username(username, locale).await
    }

    async fn check_email(&self, email: &str, locale: Locale) -> Result<(), AppError> {
        if self.users.exists_by_email(email).await? {
            warn!(email = %email, "email already being used");
            return Err(AppError::Registration(Messages::get(
                locale,
                MessageKey::EmailAlreadyExists,
                &[],
            )));
        }
        Ok(())
    }

    async fn check_username(&self, username: &str, locale: Locale) -> Result<(), AppError> {
        if self.users.exists_by_username(username).await? {
            warn!(username = %username, "username already being used");
            return Err(AppError::Registration(Messages::get(
                locale,
                MessageKey::UsernameAlreadyExists,
                &[],
            )));
        }
        Ok(())
    }
}
