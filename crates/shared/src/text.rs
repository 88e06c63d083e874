//! Text helpers.

/// Truncates `value` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut. Never splits a multi-byte character.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut out = value[..byte_idx].trim_end().to_string();
            out.push('…');
            out
        }
        None => value.to_string(),
    }
}
