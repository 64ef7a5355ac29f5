//! Error types for the game master session.

use prof_core::ReplyError;
use thiserror::Error;

/// Result type for narrative service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The narrative service failed or answered with something unusable.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No API key was configured.
    #[error("GEMINI_API_KEY (or API_KEY) environment variable not set")]
    MissingApiKey,

    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP {status} from narrative service: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The service answered but produced no text.
    #[error("no response from narrative service")]
    NoText,

    /// The reply text does not match the response contract.
    #[error(transparent)]
    Reply(#[from] ReplyError),
}

/// Errors surfaced by [`crate::GameMaster`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// An action was sent before any game was started.
    #[error("game not started")]
    NotStarted,

    /// The task running the request stopped before producing a result.
    #[error("request interrupted: {0}")]
    Interrupted(String),

    /// The narrative service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
