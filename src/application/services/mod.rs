mod extraction;
mod generation_service;
mod normalizer;
mod prompt;

pub use extraction::cap_text;
pub use generation_service::{
    FlashcardResult, GenerationError, GenerationRequest, GenerationService,
    MAX_FLASHCARDS_PER_REQUEST,
};
pub use normalizer::{fallback_flashcards, normalize_flashcards};
pub use prompt::{build_flashcard_prompt, SYSTEM_PROMPT};
