//! Core types for Profesor.exe.
//!
//! Holds the structured game state returned by the narrative service each
//! turn, the strict parser that turns raw reply text into that state, the
//! conversation transcript, and the `**bold**` markup tokenizer used when
//! rendering narrative text.

pub mod error;
pub mod markup;
pub mod response;
pub mod stats;
pub mod transcript;

pub use error::{ReplyError, ReplyResult};
pub use response::{GameResponse, Outcome};
pub use stats::GameStats;
pub use transcript::{Role, Transcript, Turn};
