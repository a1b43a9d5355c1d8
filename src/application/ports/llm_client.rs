use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one chat-style completion request and return the raw text of
    /// the first choice, whitespace-trimmed.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
