//! The session wrapper: one game, one conversation.

use std::sync::Arc;

use prof_core::GameResponse;
use tracing::{error, info, instrument};

use crate::conversation::{ChatSetup, Conversation};
use crate::error::{ServiceError, SessionError, SessionResult};
use crate::prompt::OPENING_MESSAGE;
use crate::service::NarrativeService;

/// Runs a game against a narrative service.
///
/// Owns at most one [`Conversation`]. Starting a game opens a fresh one and,
/// once the opening reply parses, replaces whatever was there before. There
/// is no retry: every failure goes straight back to the caller.
pub struct GameMaster<S> {
    service: S,
    setup: Arc<ChatSetup>,
    conversation: Option<Conversation>,
}

impl<S: NarrativeService> GameMaster<S> {
    /// Create a game master with the standard game rules.
    pub fn new(service: S) -> Self {
        Self::with_setup(service, ChatSetup::default())
    }

    /// Create a game master with custom rules and schema.
    pub fn with_setup(service: S, setup: ChatSetup) -> Self {
        Self {
            service,
            setup: Arc::new(setup),
            conversation: None,
        }
    }

    /// Whether a game is in progress.
    pub fn is_started(&self) -> bool {
        self.conversation.is_some()
    }

    /// The live conversation, if any.
    pub fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    /// Messages recorded in the live conversation; 0 before a game starts.
    pub fn turns(&self) -> usize {
        self.conversation.as_ref().map_or(0, Conversation::len)
    }

    /// The underlying service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Open a new game and return its first turn.
    ///
    /// On failure the previous conversation, if any, is kept.
    #[instrument(skip(self))]
    pub async fn start_game(&mut self) -> SessionResult<GameResponse> {
        let mut conversation = Conversation::new(Arc::clone(&self.setup));
        let response = exchange(&self.service, &mut conversation, OPENING_MESSAGE)
            .await
            .inspect_err(|e| error!(error = %e, "Error starting game"))?;

        self.conversation = Some(conversation);
        info!(stats = %response.stats, "Game started");
        Ok(response)
    }

    /// Send a player action and return the next turn.
    #[instrument(skip(self))]
    pub async fn send_action(&mut self, action: &str) -> SessionResult<GameResponse> {
        let conversation = self.conversation.as_mut().ok_or(SessionError::NotStarted)?;
        let response = exchange(&self.service, conversation, action)
            .await
            .inspect_err(|e| error!(error = %e, "Error sending action"))?;

        info!(
            stats = %response.stats,
            game_over = response.game_over,
            victory = response.victory,
            "Turn completed"
        );
        Ok(response)
    }
}

/// Send one message and parse the reply.
///
/// The exchange is recorded as soon as the service returns text, so a reply
/// that fails to parse still counts as context for the next turn.
async fn exchange<S: NarrativeService>(
    service: &S,
    conversation: &mut Conversation,
    message: &str,
) -> Result<GameResponse, ServiceError> {
    let text = service
        .generate(conversation, message)
        .await?
        .ok_or(ServiceError::NoText)?;
    conversation.record(message, &text);
    Ok(GameResponse::from_reply(&text)?)
}
