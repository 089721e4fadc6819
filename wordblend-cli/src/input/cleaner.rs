//! Line-level vocabulary cleaning

/// Convert a raw vocabulary line into a word.
///
/// Strips inline `#` comments, trims surrounding whitespace (file lines
/// arrive with their trailing newline), and rejects lines that are empty
/// or contain non-printable characters.
pub fn clean_line(line: &str) -> Option<String> {
    let word = line.split('#').next().unwrap_or_default().trim();
    if word.is_empty() || word.chars().any(char::is_control) {
        None
    } else {
        Some(word.to_string())
    }
}
