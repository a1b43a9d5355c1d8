use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)-[ \t]*\r?\n[ \t]*(\w)").unwrap());

/// Clean one page of extracted PDF text before it enters a prompt.
///
/// NFKC-normalizes ligatures and fullwidth forms, rejoins words split by
/// end-of-line hyphenation, and collapses whitespace runs. Blank lines
/// are dropped; the page comes back as single-spaced lines.
pub fn clean_page_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = HYPHEN_LINE_BREAK.replace_all(&normalized, "$1$2");

    rejoined
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
