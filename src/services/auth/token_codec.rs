use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::config::JwtProperties;
use crate::models::Role;

/// Token failures. Callers that only need "trusted or not" treat every variant the same.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed")]
    Malformed,
    #[error("token algorithm is not supported")]
    UnsupportedAlgorithm,
    #[error("failed to sign token: {0}")]
    Encode(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => TokenError::UnsupportedAlgorithm,
            _ => TokenError::Malformed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    #[serde(default)]
    iss: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    iat: i64,
    exp: i64,
}

/// Signature-verified token contents.
///
/// Expiry is *not* enforced by [`TokenCodec::decode`]; see `TokenValidator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub subject: String,
    pub issuer: String,
    pub role: Option<Role>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// HS256 token issue / verify.
///
/// Pure function of its inputs and the immutable [`JwtProperties`]; shared via `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    issuer: String,
    expiration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("issuer", &self.issuer)
            .field("expiration", &self.expiration)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(props: &JwtProperties) -> Self {
        let secret = props.secret_key.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // exp is checked against the caller's clock in TokenValidator
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["sub".to_string(), "exp".to_string()]);

        Self {
            issuer: props.issuer.clone(),
            // out-of-range lifetimes surface as an issue error, not a panic
            expiration: Duration::try_minutes(props.expiration_minute).unwrap_or(Duration::MAX),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, username: &str, role: Role) -> Result<String, TokenError> {
        self.issue_at(username, role, Utc::now())
    }

    /// Issue a token as of `now`: `iat = now`, `exp = now + expiration`.
    pub fn issue_at(
        &self,
        username: &str,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = now.checked_add_signed(self.expiration).ok_or_else(|| {
            error!(expiration = ?self.expiration, "token expiry is out of range");
            TokenError::Encode("expiry out of range".to_string())
        })?;

        let claims = TokenClaims {
            sub: username.to_string(),
            iss: self.issuer.clone(),
            role: role.as_str().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign JWT");
            TokenError::Encode(e.to_string())
        })
    }

    /// Verify the signature and return the embedded claims.
    pub fn decode(&self, token: &str) -> Result<DecodedToken, TokenError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(TokenError::Malformed)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

        Ok(DecodedToken {
            subject: claims.sub,
            issuer: claims.iss,
            role: Role::parse(&claims.role),
            issued_at,
            expires_at,
        })
    }

    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.decode(token)?.subject)
    }
}
