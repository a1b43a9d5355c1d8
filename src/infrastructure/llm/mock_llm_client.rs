use crate::application::ports::{LlmClient, LlmClientError};

/// Canned client for tests and offline wiring.
pub struct MockLlmClient {
    response: String,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(r#"{"flashcards": [{"question": "Mock question", "answer": "Mock answer"}]}"#)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        Ok(self.response.clone())
    }
}
