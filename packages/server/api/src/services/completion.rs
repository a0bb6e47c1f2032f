use crate::error::FaqResult;
use async_trait::async_trait;

/// Generates a chat reply from a system prompt and the raw user message.
///
/// Failures surface as `FaqError::CompletionService`.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> FaqResult<String>;
}
