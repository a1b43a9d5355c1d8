use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{GenerationError, GenerationRequest};
use crate::domain::{ContentType, Document, Flashcard};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct GenerateFlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
    pub processing_time: f64,
    pub topic_used: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn generate_flashcards_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let mut text: Option<String> = None;
    let mut document: Option<(Document, Vec<u8>)> = None;
    let mut num_flashcards: Option<u32> = None;
    let mut topic: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("text") => match field.text().await {
                Ok(t) => text = Some(t),
                Err(e) => return bad_request(format!("Failed to read text field: {}", e)),
            },
            Some("document") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let content_type = match ContentType::from_mime(&mime) {
                    Some(ct) => ct,
                    None => {
                        tracing::warn!(content_type = %mime, "Unsupported content type");
                        return (
                            StatusCode::UNSUPPORTED_MEDIA_TYPE,
                            Json(ErrorResponse {
                                detail: format!("Unsupported content type: {}", mime),
                            }),
                        )
                            .into_response();
                    }
                };

                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => return bad_request(format!("Failed to read document: {}", e)),
                };

                tracing::debug!(filename = %filename, bytes = data.len(), "Document received");

                document = Some((
                    Document::new(filename, content_type, data.len() as u64),
                    data.to_vec(),
                ));
            }
            Some("num_flashcards") => {
                let raw = match field.text().await {
                    Ok(t) => t,
                    Err(e) => {
                        return bad_request(format!("Failed to read num_flashcards field: {}", e))
                    }
                };
                match raw.trim().parse() {
                    Ok(n) => num_flashcards = Some(n),
                    Err(_) => {
                        return bad_request(format!("Invalid num_flashcards: {}", raw));
                    }
                }
            }
            Some("topic") => match field.text().await {
                Ok(t) if !t.trim().is_empty() => topic = Some(t),
                Ok(_) => {}
                Err(e) => return bad_request(format!("Failed to read topic field: {}", e)),
            },
            _ => {}
        }
    }

    let request = GenerationRequest {
        text,
        document,
        num_flashcards: num_flashcards
            .unwrap_or(state.settings.generation.default_num_flashcards),
        topic,
    };

    tracing::debug!(
        text = %sanitize_for_log(request.text.as_deref().unwrap_or_default()),
        has_document = request.document.is_some(),
        num_flashcards = request.num_flashcards,
        topic = ?request.topic,
        "Processing flashcard generation"
    );

    match state.generation_service.generate(request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateFlashcardsResponse {
                flashcards: result.flashcards,
                processing_time: result.processing_time,
                topic_used: result.topic_used,
            }),
        )
            .into_response(),
        Err(GenerationError::InvalidInput(detail)) => {
            tracing::warn!(detail = %detail, "Invalid generation request");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Flashcard generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Server error: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(detail: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { detail })).into_response()
}
