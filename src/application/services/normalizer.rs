use serde_json::Value;

use crate::domain::Flashcard;

/// Parse raw model output into a flashcard list.
///
/// Never fails outward: unparseable output is replaced by the fixed
/// fallback list so the response shape stays satisfiable. A valid JSON
/// object without a `flashcards` key yields an empty list, not the
/// fallback.
pub fn normalize_flashcards(raw: &str) -> Vec<Flashcard> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => match map.get("flashcards") {
            None => Vec::new(),
            Some(list) => serde_json::from_value(list.clone()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Model returned a malformed flashcards list");
                fallback_flashcards()
            }),
        },
        Ok(_) => {
            tracing::warn!("Model returned valid JSON that is not an object");
            fallback_flashcards()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model output is not valid JSON");
            fallback_flashcards()
        }
    }
}

/// Placeholder cards substituted when model output cannot be read.
pub fn fallback_flashcards() -> Vec<Flashcard> {
    vec![
        Flashcard::new("Sample question", "Sample answer"),
        Flashcard::new(
            "Why is this a placeholder?",
            "The generator returned output that could not be parsed.",
        ),
    ]
}

fn strip_code_fences(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
