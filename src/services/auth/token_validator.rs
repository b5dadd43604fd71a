use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::auth::token_codec::{TokenCodec, TokenError};

/// Checks a presented token against the username the caller acts as.
///
/// - expired / foreign-subject tokens are a plain `Ok(false)`
/// - undecodable tokens propagate the codec's [`TokenError`]
#[derive(Clone, Debug)]
pub struct TokenValidator {
    codec: Arc<TokenCodec>,
}

impl TokenValidator {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn is_valid(&self, token: &str, expected_username: &str) -> Result<bool, TokenError> {
        self.is_valid_at(token, expected_username, Utc::now())
    }

    /// `expires_at` must be strictly after `now`; subject comparison is exact and case-sensitive.
    pub fn is_valid_at(
        &self,
        token: &str,
        expected_username: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, TokenError> {
        let decoded = self.codec.decode(token)?;

        let same_subject = decoded.subject == expected_username;
        let not_expired = decoded.expires_at > now;

        Ok(same_subject && not_expired)
    }
}
