use std::sync::Arc;

use tracing::{error, info};

use crate::error::AppError;
use crate::services::auth::authenticator::{AuthError, CredentialAuthenticator};
use crate::services::auth::token_codec::TokenCodec;
use crate::services::messages::{Locale, MessageKey, Messages};

/// Login: authenticate credentials, then mint a token for the principal.
#[derive(Clone, Debug)]
pub struct LoginService {
    authenticator: CredentialAuthenticator,
    codec: Arc<TokenCodec>,
}

impl LoginService {
    pub fn new(authenticator: CredentialAuthenticator, codec: Arc<TokenCodec>) -> Self {
        Self {
            authenticator,
            codec,
        }
    }

    /// Returns the signed token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        locale: Locale,
    ) -> Result<String, AppError> {
        let principal = self
            .authenticator
            .authenticate(username, password)
            .await
            .map_err(|e| match e {
                AuthError::AuthenticationFailed => AppError::BadCredentials(Messages::get(
                    locale,
                    MessageKey::InvalidCredentials,
                    &[],
                )),
                AuthError::Repo(e) => e.into(),
            })?;

        let token = self
            .codec
            .issue(&principal.username, principal.role)
            .map_err(|e| {
                error!(error = %e, "failed to issue token");
                AppError::Internal
            })?;

        info!(username = %principal.username, "logged in successfully");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtProperties;
    use crate::models::{NewUser, Role};
    use crate::repos::{InMemoryUserRepository, UserRepository};
    use crate::services::auth::password::PasswordEncoder;

    async fn login_service() -> (LoginService, Arc<TokenCodec>) {
        let encoder = PasswordEncoder::new(4);
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(NewUser {
            name: "Ann".into(),
            username: "ann1".into(),
            email: "ann@x.com".into(),
            password_hash: encoder.encode("pw12345".into()).await.unwrap(),
            role: Role::Admin,
        })
        .await
        .unwrap();

        let codec = Arc::new(TokenCodec::new(&JwtProperties {
            issuer: "boilerplate".into(),
            secret_key: "secret-key".into(),
            expiration_minute: 5,
        }));
        let authenticator = CredentialAuthenticator::new(repo, encoder);

        (LoginService::new(authenticator, codec.clone()), codec)
    }

    #[tokio::test]
    async fn successful_login_issues_token_for_principal() {
        let (service, codec) = login_service().await;

        let token = service.login("ann1", "pw12345", Locale::En).await.unwrap();

        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded.subject, "ann1");
        assert_eq!(decoded.role, Some(Role::Admin));
        assert_eq!(decoded.issuer, "boilerplate");
    }

    #[tokio::test]
    async fn failed_logins_share_one_message() {
        let (service, _) = login_service().await;

        let wrong_password = service.login("ann1", "bad", Locale::En).await.unwrap_err();
        let unknown_user = service.login("ghost", "pw12345", Locale::En).await.unwrap_err();

        match (wrong_password, unknown_user) {
            (AppError::BadCredentials(a), AppError::BadCredentials(b)) => {
                assert_eq!(a, b);
                assert_eq!(a, "Invalid username or password.");
            }
            other => panic!("unexpected errors: {other:?}"),
        }
    }
}
