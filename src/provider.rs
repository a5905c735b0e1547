use crate::{ChatCompletion, Error, LLMRequest};

/// A trait for services that answer chat-completion requests.
/// The runner only talks to this trait, so tests can swap in a double.
#[async_trait::async_trait]
pub trait LLMProvider: Send + Sync + 'static {
    /// Send one chat-completion request and wait for the full result.
    async fn complete(&self, request: &LLMRequest) -> Result<ChatCompletion, Error>;
}
