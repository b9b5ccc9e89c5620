//! Line normalization and word tokenization
//!
//! Lines are lowercased and trimmed, then split on whitespace. Each piece has
//! the characters in [`PUNCTUATION`] stripped from both ends; what remains is a
//! word, possibly the empty string.

/// Characters stripped from both ends of every piece
pub const PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

/// Whitespace test used for trimming and splitting.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which text tools commonly treat as line/field breaks.
#[inline]
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercase a line and trim surrounding whitespace
pub fn normalize_line(line: &str) -> String {
    line.to_lowercase().trim_matches(is_blank).to_string()
}

/// Normalize every raw line, keeping order
pub fn normalize_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| normalize_line(line)).collect()
}

/// Strip leading and trailing punctuation from a piece
pub fn strip_punctuation(piece: &str) -> &str {
    piece.trim_matches(&PUNCTUATION[..])
}

/// Split one normalized line into words
pub fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_blank)
        .filter(|piece| !piece.is_empty())
        .map(strip_punctuation)
}

/// Split all normalized lines into one flat word sequence
pub fn split_into_words(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .flat_map(|line| split_line(line))
        .map(str::to_string)
        .collect()
}
