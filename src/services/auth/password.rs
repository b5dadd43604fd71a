//! bcrypt password hashing.
//!
//! Hashing and verification are CPU-bound (tens of ms at the default cost), so both run on
//! tokio's blocking pool instead of the request task.

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone, Copy, Debug)]
pub struct PasswordEncoder {
    cost: u32,
}

impl PasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Salted bcrypt hash of `raw`.
    pub async fn encode(&self, raw: String) -> Result<String, PasswordError> {
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(raw, cost)).await??;
        Ok(hash)
    }

    /// `true` only when `raw` matches `hash`. An unparseable stored hash counts as a mismatch.
    pub async fn matches(&self, raw: String, hash: String) -> bool {
        match tokio::task::spawn_blocking(move || bcrypt::verify(raw, &hash)).await {
            Ok(Ok(matched)) => matched,
            Ok(Err(e)) => {
                warn!(error = %e, "stored password hash could not be verified");
                false
            }
            Err(e) => {
                warn!(error = %e, "password verification task failed");
                false
            }
        }
    }
}
