// src/extractor/lines.rs

/// Split raw document text into trimmed, non-empty lines, preserving order.
/// Total over any input; an empty result is valid.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
