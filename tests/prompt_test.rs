use flashdeck::application::services::build_flashcard_prompt;

#[test]
fn given_no_topic_when_building_prompt_then_contains_count_and_text() {
    let prompt = build_flashcard_prompt("The Treaty of Westphalia ended the war.", 7, None);

    assert!(prompt.contains("Generate exactly 7 flashcards from the following text."));
    assert!(prompt.contains("The Treaty of Westphalia ended the war."));
    assert!(!prompt.contains("Ignore unrelated content"));
}

#[test]
fn given_topic_when_building_prompt_then_contains_topic_instruction() {
    let prompt = build_flashcard_prompt("Cells and empires.", 3, Some("Biology"));

    assert!(prompt.contains("only about the topic 'Biology'"));
    assert!(prompt.contains("Ignore unrelated content."));
    assert!(prompt.contains("Generate exactly 3 flashcards"));
}

#[test]
fn given_any_input_when_building_prompt_then_contains_json_shape_example() {
    let prompt = build_flashcard_prompt("text", 5, None);

    assert!(prompt.contains(r#"{"flashcards": [{"question": "...", "answer": "..."}]}"#));
    assert!(prompt.contains("Text:\ntext"));
}
