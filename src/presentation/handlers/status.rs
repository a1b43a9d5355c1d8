use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub model: String,
    pub text_cap: usize,
    pub default_num_flashcards: u32,
}

/// Fixed configuration report for external collaborators.
pub async fn status_handler<F, L>(State(state): State<AppState<F, L>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    (
        StatusCode::OK,
        Json(StatusResponse {
            model: state.settings.llm.model.clone(),
            text_cap: state.settings.generation.text_cap,
            default_num_flashcards: state.settings.generation.default_num_flashcards,
        }),
    )
}
