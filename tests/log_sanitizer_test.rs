use flashdeck::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_for_log(""), "[empty]");
    assert_eq!(sanitize_for_log("   "), "[empty]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_unchanged() {
    let text = "Paris is the capital of France.";
    assert_eq!(sanitize_for_log(text), text);
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total() {
    let text = "a".repeat(300);

    let result = sanitize_for_log(&text);

    assert!(result.starts_with(&"a".repeat(120)));
    assert!(result.contains("(300 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let result = sanitize_for_log("header was Bearer sk-abc123xyz");

    assert!(result.contains("[redacted]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_pair_when_sanitizing_then_redacts_value() {
    let result = sanitize_for_log("called with api_key=verysecret and more");

    assert!(result.contains("api_key=[redacted]"));
    assert!(!result.contains("verysecret"));
}

#[test]
fn given_padded_text_when_sanitizing_then_trims() {
    assert_eq!(sanitize_for_log("  hello  "), "hello");
}
