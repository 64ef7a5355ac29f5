//! The seam between the session wrapper and the remote narrative service.

use async_trait::async_trait;

use crate::conversation::Conversation;
use crate::error::ServiceResult;

/// A text-generation backend that can continue a conversation.
#[async_trait]
pub trait NarrativeService: Send + Sync {
    /// Send `message` as the next user turn of `conversation`.
    ///
    /// Returns the raw reply text, or `None` if the service answered without
    /// producing any. The conversation is not modified; recording the
    /// exchange is up to the caller.
    async fn generate(
        &self,
        conversation: &Conversation,
        message: &str,
    ) -> ServiceResult<Option<String>>;
}
