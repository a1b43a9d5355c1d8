use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::services::extraction::cap_text;
use crate::application::services::normalizer::normalize_flashcards;
use crate::application::services::prompt::{build_flashcard_prompt, SYSTEM_PROMPT};
use crate::domain::{Document, Flashcard};

/// Upper bound on the requested card count. The HTTP form never carried
/// one historically; values outside 1..=50 are rejected rather than
/// silently forwarded to the model.
pub const MAX_FLASHCARDS_PER_REQUEST: u32 = 50;

pub struct GenerationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    text_cap: usize,
}

#[derive(Debug)]
pub struct GenerationRequest {
    pub text: Option<String>,
    pub document: Option<(Document, Vec<u8>)>,
    pub num_flashcards: u32,
    pub topic: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FlashcardResult {
    pub flashcards: Vec<Flashcard>,
    pub processing_time: f64,
    pub topic_used: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}

impl<F, L> GenerationService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>, text_cap: usize) -> Self {
        Self {
            file_loader,
            llm_client,
            text_cap,
        }
    }

    /// Run the full pipeline for one request: extract, cap, prompt,
    /// complete, normalize. Elapsed time covers the whole pipeline.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<FlashcardResult, GenerationError> {
        let started = Instant::now();

        if request.num_flashcards == 0 || request.num_flashcards > MAX_FLASHCARDS_PER_REQUEST {
            return Err(GenerationError::InvalidInput(format!(
                "num_flashcards must be between 1 and {}",
                MAX_FLASHCARDS_PER_REQUEST
            )));
        }

        let extracted = self.extract_input(&request).await?;
        let capped = cap_text(&extracted, self.text_cap);

        if capped.trim().is_empty() {
            return Err(GenerationError::InvalidInput(
                "no text available in the provided input".to_string(),
            ));
        }

        let prompt =
            build_flashcard_prompt(capped, request.num_flashcards, request.topic.as_deref());

        let raw_output = self.llm_client.complete(SYSTEM_PROMPT, &prompt).await?;

        tracing::debug!(chars = raw_output.len(), "Raw model output received");

        let flashcards = normalize_flashcards(&raw_output);
        let processing_time = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;

        tracing::info!(
            cards = flashcards.len(),
            processing_time,
            "Flashcard generation complete"
        );

        Ok(FlashcardResult {
            flashcards,
            processing_time,
            topic_used: request.topic,
        })
    }

    /// Direct text takes priority over an uploaded document when both
    /// are supplied.
    async fn extract_input(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if let Some(text) = request.text.as_deref().filter(|t| !t.is_empty()) {
            return Ok(text.to_string());
        }

        let Some((document, data)) = request.document.as_ref() else {
            return Err(GenerationError::InvalidInput(
                "no text or document provided".to_string(),
            ));
        };

        match self.file_loader.extract_text(data, document).await {
            Ok(text) => Ok(text),
            Err(FileLoaderError::NoTextFound(filename)) => Err(GenerationError::InvalidInput(
                format!("no text available in {}", filename),
            )),
            Err(e) => Err(GenerationError::Extraction(e)),
        }
    }
}
