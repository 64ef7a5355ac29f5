//! Error types for reply parsing.

use thiserror::Error;

/// Result type for reply parsing.
pub type ReplyResult<T> = Result<T, ReplyError>;

/// Errors raised when a narrative reply does not satisfy the response contract.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The service replied with no text at all.
    #[error("empty reply from narrative service")]
    Empty,

    /// The reply is not JSON or does not match the response schema.
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),
}
