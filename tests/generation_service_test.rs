use std::sync::{Arc, Mutex};

use flashdeck::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use flashdeck::application::services::{
    GenerationError, GenerationRequest, GenerationService, MAX_FLASHCARDS_PER_REQUEST,
};
use flashdeck::domain::{ContentType, Document};
use flashdeck::infrastructure::llm::MockLlmClient;

const TEST_TEXT_CAP: usize = 2000;

/// Records the prompts it receives so tests can assert on what actually
/// reached the gateway.
struct RecordingLlmClient {
    prompts: Arc<Mutex<Vec<String>>>,
}

impl RecordingLlmClient {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                prompts: Arc::clone(&prompts),
            },
            prompts,
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(user_prompt.to_string());
        Ok(r#"{"flashcards": [{"question": "Q", "answer": "A"}]}"#.to_string())
    }
}

struct FixedTextFileLoader(&'static str);

#[async_trait::async_trait]
impl FileLoader for FixedTextFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        _document: &Document,
    ) -> Result<String, FileLoaderError> {
        Ok(self.0.to_string())
    }
}

struct EmptyFileLoader;

#[async_trait::async_trait]
impl FileLoader for EmptyFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::NoTextFound(document.filename.clone()))
    }
}

fn text_request(text: &str) -> GenerationRequest {
    GenerationRequest {
        text: Some(text.to_string()),
        document: None,
        num_flashcards: 5,
        topic: None,
    }
}

fn document_request() -> GenerationRequest {
    let data = b"ignored".to_vec();
    GenerationRequest {
        text: None,
        document: Some((
            Document::new("notes.pdf".to_string(), ContentType::Pdf, data.len() as u64),
            data,
        )),
        num_flashcards: 5,
        topic: None,
    }
}

#[tokio::test]
async fn given_direct_text_when_generating_then_result_has_cards_and_timing() {
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(MockLlmClient::default()),
        TEST_TEXT_CAP,
    );

    let result = service
        .generate(text_request("Paris is the capital of France."))
        .await
        .unwrap();

    assert_eq!(result.flashcards.len(), 1);
    assert!(result.processing_time >= 0.0);
    assert!(result.topic_used.is_none());
}

#[tokio::test]
async fn given_text_and_document_when_generating_then_direct_text_wins() {
    let (llm, prompts) = RecordingLlmClient::new();
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("DOCUMENT CONTENT")),
        Arc::new(llm),
        TEST_TEXT_CAP,
    );

    let mut request = document_request();
    request.text = Some("DIRECT TEXT".to_string());

    service.generate(request).await.unwrap();

    let recorded = prompts.lock().unwrap();
    assert!(recorded[0].contains("DIRECT TEXT"));
    assert!(!recorded[0].contains("DOCUMENT CONTENT"));
}

#[tokio::test]
async fn given_empty_text_and_document_when_generating_then_document_is_used() {
    let (llm, prompts) = RecordingLlmClient::new();
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("DOCUMENT CONTENT")),
        Arc::new(llm),
        TEST_TEXT_CAP,
    );

    let mut request = document_request();
    request.text = Some(String::new());

    service.generate(request).await.unwrap();

    assert!(prompts.lock().unwrap()[0].contains("DOCUMENT CONTENT"));
}

#[tokio::test]
async fn given_overlong_text_when_generating_then_prompt_is_capped() {
    let (llm, prompts) = RecordingLlmClient::new();
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(llm),
        TEST_TEXT_CAP,
    );

    let text = format!("{}MARKER", "a".repeat(TEST_TEXT_CAP));
    service.generate(text_request(&text)).await.unwrap();

    let recorded = prompts.lock().unwrap();
    assert!(recorded[0].contains(&"a".repeat(TEST_TEXT_CAP)));
    assert!(!recorded[0].contains("MARKER"));
}

#[tokio::test]
async fn given_whitespace_only_text_when_generating_then_invalid_input() {
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(MockLlmClient::default()),
        TEST_TEXT_CAP,
    );

    let result = service.generate(text_request("   \n\t  ")).await;

    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[tokio::test]
async fn given_no_input_when_generating_then_invalid_input() {
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(MockLlmClient::default()),
        TEST_TEXT_CAP,
    );

    let request = GenerationRequest {
        text: None,
        document: None,
        num_flashcards: 5,
        topic: None,
    };

    let result = service.generate(request).await;

    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[tokio::test]
async fn given_document_without_text_when_generating_then_invalid_input() {
    let service = GenerationService::new(
        Arc::new(EmptyFileLoader),
        Arc::new(MockLlmClient::default()),
        TEST_TEXT_CAP,
    );

    let result = service.generate(document_request()).await;

    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
}

#[tokio::test]
async fn given_out_of_range_count_when_generating_then_invalid_input() {
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(MockLlmClient::default()),
        TEST_TEXT_CAP,
    );

    for count in [0, MAX_FLASHCARDS_PER_REQUEST + 1] {
        let mut request = text_request("Some material.");
        request.num_flashcards = count;

        let result = service.generate(request).await;

        assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
    }
}

#[tokio::test]
async fn given_topic_when_generating_then_topic_is_echoed_and_in_prompt() {
    let (llm, prompts) = RecordingLlmClient::new();
    let service = GenerationService::new(
        Arc::new(FixedTextFileLoader("unused")),
        Arc::new(llm),
        TEST_TEXT_CAP,
    );

    let mut request = text_request("Cells produce energy.");
    request.topic = Some("Biology".to_string());

    let result = service.generate(request).await.unwrap();

    assert_eq!(result.topic_used.as_deref(), Some("Biology"));
    assert!(prompts.lock().unwrap()[0].contains("'Biology'"));
}
