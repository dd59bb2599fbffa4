use async_trait::async_trait;
use crate::errors::LlmPingError;
use super::types::CompletionReply;

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one user message and return the reply's first text block.
    async fn complete(&self, prompt: &str) -> Result<CompletionReply, LlmPingError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
