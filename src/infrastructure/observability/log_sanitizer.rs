use std::sync::LazyLock;

use regex::Regex;

const LOG_PREVIEW_CHARS: usize = 120;

static SECRET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(bearer\s+|api[_-]?key=|password=|secret=|token=)[^\s&"']+"#).unwrap()
});

/// Prepare user-supplied text (prompts, extracted text, topics) for log
/// output: redact credential-shaped substrings and truncate to a short
/// preview.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[empty]");
    }

    let redacted = SECRET_PATTERN.replace_all(trimmed, "$1[redacted]");
    let total_chars = redacted.chars().count();

    if total_chars <= LOG_PREVIEW_CHARS {
        return redacted.into_owned();
    }

    let preview: String = redacted.chars().take(LOG_PREVIEW_CHARS).collect();
    format!("{preview}... ({total_chars} chars total)")
}
