use flashdeck::application::services::{fallback_flashcards, normalize_flashcards};

#[test]
fn given_fenced_json_when_normalizing_then_parses_flashcards() {
    let raw = "```json\n{\"flashcards\":[{\"question\":\"Q\",\"answer\":\"A\"}]}\n```";

    let cards = normalize_flashcards(raw);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Q");
    assert_eq!(cards[0].answer, "A");
}

#[test]
fn given_unfenced_json_when_normalizing_then_parses_flashcards() {
    let raw = r#"{"flashcards": [{"question": "Q1", "answer": "A1"}, {"question": "Q2", "answer": "A2"}]}"#;

    let cards = normalize_flashcards(raw);

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].question, "Q2");
}

#[test]
fn given_garbage_when_normalizing_then_returns_fallback() {
    let cards = normalize_flashcards("not json at all");

    assert!(!cards.is_empty());
    assert_eq!(cards, fallback_flashcards());
}

#[test]
fn given_json_without_flashcards_key_when_normalizing_then_returns_empty_list() {
    let cards = normalize_flashcards(r#"{"other_key": []}"#);

    assert!(cards.is_empty());
}

#[test]
fn given_json_array_at_top_level_when_normalizing_then_returns_fallback() {
    let cards = normalize_flashcards(r#"[{"question": "Q", "answer": "A"}]"#);

    assert_eq!(cards, fallback_flashcards());
}

#[test]
fn given_wrong_shaped_flashcards_list_when_normalizing_then_returns_fallback() {
    let cards = normalize_flashcards(r#"{"flashcards": [1, 2, 3]}"#);

    assert_eq!(cards, fallback_flashcards());
}

#[test]
fn given_extra_whitespace_around_fences_when_normalizing_then_still_parses() {
    let raw = "  \n```\n{\"flashcards\":[{\"question\":\"Q\",\"answer\":\"A\"}]}\n```  \n";

    let cards = normalize_flashcards(raw);

    assert_eq!(cards.len(), 1);
}
