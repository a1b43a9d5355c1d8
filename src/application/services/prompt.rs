/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a JSON generator. Always return valid JSON only.";

/// Literal example of the JSON shape the model must return.
const JSON_SHAPE_EXAMPLE: &str = r#"{"flashcards": [{"question": "...", "answer": "..."}]}"#;

/// Build the user prompt for a flashcard generation request.
///
/// The topic variant narrows generation to a subject within the source
/// text; neither topic nor text is escaped, so a caller can steer the
/// model through them (accepted limitation of prompting).
pub fn build_flashcard_prompt(text: &str, count: u32, topic: Option<&str>) -> String {
    match topic {
        Some(topic) => format!(
            "Generate exactly {count} flashcards only about the topic '{topic}' \
             from the following text. Ignore unrelated content.\n\n\
             {JSON_SHAPE_EXAMPLE}\n\n\
             Text:\n{text}"
        ),
        None => format!(
            "Generate exactly {count} flashcards from the following text.\n\n\
             {JSON_SHAPE_EXAMPLE}\n\n\
             Text:\n{text}"
        ),
    }
}
