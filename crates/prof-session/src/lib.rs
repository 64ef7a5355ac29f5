//! Game master session for Profesor.exe.
//!
//! The narrative service answers one request at a time and forgets
//! everything in between. [`GameMaster`] keeps a single [`Conversation`]
//! alive across turns, sends the fixed game rules and response schema with
//! every request, and parses each reply into a [`prof_core::GameResponse`].
//!
//! The service itself sits behind the [`NarrativeService`] trait;
//! [`GeminiService`] is the production implementation.

pub mod config;
pub mod conversation;
pub mod error;
pub mod gemini;
pub mod master;
pub mod prompt;
pub mod service;

pub use config::SessionConfig;
pub use conversation::{ChatSetup, Conversation, Message};
pub use error::{ServiceError, ServiceResult, SessionError, SessionResult};
pub use gemini::GeminiService;
pub use master::GameMaster;
pub use service::NarrativeService;
