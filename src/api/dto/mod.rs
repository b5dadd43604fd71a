/*
 * Responsibility
 * - request/response DTO
 * - Validate: body が満たすべき field 制約 (違反を MessageKey で返す。ローカライズは extractor 側)
 */
pub mod auth;

use crate::services::messages::MessageKey;

pub trait Validate {
    /// Violated constraints in field declaration order; empty when valid.
    fn validate(&self) -> Vec<MessageKey>;
}
