//! Bearer token (JWT) 検証 → SecurityContext を extensions に入れる
//!
//! 1 request につき 1 回だけ通る filter:
//! - `Authorization: Bearer <jwt>` が無い / prefix 不一致 → 未認証のまま次へ
//! - token から username が取れない → 未認証のまま次へ
//! - user store に username が無い → 未認証のまま次へ
//! - token が (username, exp) に対して有効 → SecurityContext を insert して次へ
//!
//! ここでは決して reject しない。拒否するかどうかは authorization layer が決める。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::extractors::SecurityContext;
use crate::repos::UserRepository;
use crate::services::auth::{TokenCodec, TokenValidator};
use crate::state::AppState;

use super::TOKEN_PREFIX;

/// Stateless across requests; shared via `Arc` in [`AppState`].
#[derive(Clone)]
pub struct JwtAuthenticationFilter {
    codec: Arc<TokenCodec>,
    validator: TokenValidator,
    users: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for JwtAuthenticationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuthenticationFilter")
            .field("codec", &self.codec)
            .finish()
    }
}

impl JwtAuthenticationFilter {
    pub fn new(
        codec: Arc<TokenCodec>,
        validator: TokenValidator,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            codec,
            validator,
            users,
        }
    }

    /// Resolve the request's principal from its headers, if any.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Option<SecurityContext> {
        let token = bearer_token(headers)?;

        let username = match self.codec.extract_username(token) {
            Ok(username) => username,
            Err(err) => {
                debug!(error = %err, "bearer token could not be decoded");
                return None;
            }
        };

        let user = match self.users.find_by_username(&username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(username = %username, "token subject is not a known user");
                return None;
            }
            Err(err) => {
                warn!(error = ?err, "user lookup failed during token authentication");
                return None;
            }
        };

        match self.validator.is_valid(token, &user.username) {
            Ok(true) => Some(SecurityContext::new(user.username, user.role)),
            Ok(false) => {
                debug!(username = %user.username, "bearer token expired or subject mismatch");
                None
            }
            Err(err) => {
                debug!(error = %err, "bearer token rejected");
                None
            }
        }
    }
}

/// Token part of `Authorization: Bearer <token>`; `None` when absent or another scheme.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(TOKEN_PREFIX))
}

pub async fn jwt_filter(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(ctx) = state.auth_filter.authenticate(req.headers()).await {
        // filter → authorization / extractor への受け渡し
        req.extensions_mut().insert(ctx);
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::config::JwtProperties;
    use crate::models::{NewUser, Role};
    use crate::repos::InMemoryUserRepository;

    async fn filter() -> (JwtAuthenticationFilter, Arc<TokenCodec>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.save(NewUser {
            name: "Ann".into(),
            username: "ann1".into(),
            email: "ann@x.com".into(),
            password_hash: "unused".into(),
            role: Role::Admin,
        })
        .await
        .unwrap();

        let codec = Arc::new(TokenCodec::new(&JwtProperties {
            issuer: "boilerplate".into(),
            secret_key: "secret-key".into(),
            expiration_minute: 10,
        }));
        let validator = TokenValidator::new(codec.clone());

        (
            JwtAuthenticationFilter::new(codec.clone(), validator, repo),
            codec,
        )
    }

    fn headers_with(authorization: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(authorization).unwrap(),
        );
        headers
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(bearer_token(&headers_with("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers_with("Basic abc")), None);
        assert_eq!(bearer_token(&headers_with("bearer abc")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn valid_token_yields_context_with_stored_role() {
        let (filter, codec) = filter().await;
        let token = codec.issue("ann1", Role::User).unwrap();

        let ctx = filter
            .authenticate(&headers_with(&format!("Bearer {token}")))
            .await
            .unwrap();
        // role comes from the user store, not the token
        assert_eq!(ctx, SecurityContext::new("ann1", Role::Admin));
    }

    #[tokio::test]
    async fn missing_or_foreign_scheme_is_anonymous() {
        let (filter, codec) = filter().await;
        let token = codec.issue("ann1", Role::User).unwrap();

        assert!(filter.authenticate(&HeaderMap::new()).await.is_none());
        assert!(
            filter
                .authenticate(&headers_with(&format!("Token {token}")))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn undecodable_token_is_anonymous() {
        let (filter, _) = filter().await;
        assert!(filter.authenticate(&headers_with("Bearer garbage")).await.is_none());
    }

    #[tokio::test]
    async fn unknown_subject_is_anonymous() {
        let (filter, codec) = filter().await;
        let token = codec.issue("ghost", Role::User).unwrap();
        assert!(
            filter
                .authenticate(&headers_with(&format!("Bearer {token}")))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn expired_token_is_anonymous() {
        let (filter, codec) = filter().await;
        let token = codec
            .issue_at("ann1", Role::User, Utc::now() - Duration::hours(1))
            .unwrap();
        assert!(
            filter
                .authenticate(&headers_with(&format!("Bearer {token}")))
                .await
                .is_none()
        );
    }
}
