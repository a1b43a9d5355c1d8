/// Truncate text to at most `cap` characters, respecting char boundaries.
pub fn cap_text(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
