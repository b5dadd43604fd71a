/*
 * Responsibility
 * - /login, /register の request/response DTO
 * - validate(): 形式チェック (空文字 / email 形式)。重複チェックは service 側
 * - 欠けたフィールドは空文字として受け取り、validation error として返す
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::Validate;
use crate::services::messages::MessageKey;
use crate::services::user::Registration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Vec<MessageKey> {
        let mut errors = Vec::new();
        if self.username.is_empty() {
            errors.push(MessageKey::LoginUsernameNotEmpty);
        }
        if self.password.is_empty() {
            errors.push(MessageKey::LoginPasswordNotEmpty);
        }
        errors
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Validate for RegistrationRequest {
    fn validate(&self) -> Vec<MessageKey> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(MessageKey::RegistrationNameNotEmpty);
        }
        if self.email.is_empty() {
            errors.push(MessageKey::RegistrationEmailNotEmpty);
        } else if !is_valid_email(&self.email) {
            errors.push(MessageKey::RegistrationEmailIsNotValid);
        }
        if self.username.is_empty() {
            errors.push(MessageKey::RegistrationUsernameNotEmpty);
        }
        if self.password.is_empty() {
            errors.push(MessageKey::RegistrationPasswordNotEmpty);
        }
        errors
    }
}

impl From<RegistrationRequest> for Registration {
    fn from(req: RegistrationRequest) -> Self {
        Registration {
            name: req.name,
            email: req.email,
            username: req.username,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
}

/// `local@domain` syntax check.
///
/// - exactly one `@`, non-empty local part without whitespace
/// - domain: dot-separated labels of ASCII alphanumerics / `-`, no leading or trailing `-`
/// - a single-label domain (`user@localhost`) is accepted
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || local.len() > 64
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
        || local.chars().any(|c| c.is_whitespace() || c == '@' || c.is_control())
    {
        return false;
    }

    if domain.is_empty() || domain.len() > 255 {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
