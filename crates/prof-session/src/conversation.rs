//! The live multi-turn context held for one game.

use std::sync::Arc;

use prof_core::Role;
use serde_json::Value;

use crate::prompt;

/// Fixed per-session configuration sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSetup {
    /// Game rules, tone and output format.
    pub system_instruction: String,
    /// Structured-output schema the reply must satisfy.
    pub response_schema: Value,
}

impl Default for ChatSetup {
    fn default() -> Self {
        Self {
            system_instruction: prompt::SYSTEM_INSTRUCTION.trim().to_string(),
            response_schema: prompt::response_schema(),
        }
    }
}

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Who sent it.
    pub role: Role,
    /// Raw text, exactly as sent or received.
    pub text: String,
}

/// A conversation with the game master.
///
/// Holds every exchange that got an answer, so each request can replay the
/// full context to a service that keeps no state of its own.
#[derive(Debug, Clone)]
pub struct Conversation {
    setup: Arc<ChatSetup>,
    history: Vec<Message>,
}

impl Conversation {
    /// Open an empty conversation.
    pub fn new(setup: Arc<ChatSetup>) -> Self {
        Self {
            setup,
            history: Vec::new(),
        }
    }

    /// The fixed setup.
    pub fn setup(&self) -> &ChatSetup {
        &self.setup
    }

    /// Messages exchanged so far, oldest first.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Number of messages exchanged.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been exchanged yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Record a message and the reply it got.
    pub fn record(&mut self, message: &str, reply: &str) {
        self.history.push(Message {
            role: Role::User,
            text: message.to_string(),
        });
        self.history.push(Message {
            role: Role::Model,
            text: reply.to_string(),
        });
    }
}
