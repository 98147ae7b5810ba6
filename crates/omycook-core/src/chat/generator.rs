//! Reply capability for the chat engine.

use async_trait::async_trait;

use super::message::ChatMessage;
use crate::error::Result;

/// Produces an assistant reply for the latest user message.
///
/// Implementations own their latency.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Returns the reply text for `prompt`, given the history that preceded it.
    async fn generate_reply(&self, prompt: &str, history: &[ChatMessage]) -> Result<String>;
}
