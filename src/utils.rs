/// Characters after which a chunk may end on a sentence boundary.
/// `।` is the danda used by Hindi, Bengali, Odia and other Indic scripts.
const SENTENCE_TERMINATORS: [char; 4] = ['.', '?', '!', '।'];

/// Byte offset of the `n`-th character, or the string length if there are fewer.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Boundaries are searched in the first `max_chars` characters only, so no
/// chunk is ever longer than `max_chars`. A chunk ends after the last sentence
/// terminator in that window when the terminator sits in its second half,
/// otherwise after the last whitespace, otherwise exactly at `max_chars`.
///
/// Example:
/// ```rust
/// use vaani_tts::utils::split_text;
///
/// let chunks = split_text("One. Two. Three.", 10);
/// assert_eq!(chunks, vec!["One. Two.", "Three."]);
/// ```
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        if remaining.chars().count() <= max_chars {
            chunks.push(remaining.to_string());
            break;
        }

        let window = &remaining[..byte_offset(remaining, max_chars)];

        let sentence_break = window
            .char_indices()
            .filter(|(_, c)| SENTENCE_TERMINATORS.contains(c))
            .last()
            .filter(|(index, _)| window[..*index].chars().count() >= max_chars / 2);
        let word_break = || {
            window
                .char_indices()
                .filter(|(_, c)| c.is_whitespace())
                .last()
        };

        let split_at = match sentence_break.or_else(word_break) {
            Some((index, c)) => index + c.len_utf8(),
            None => window.len(),
        };

        let chunk = remaining[..split_at].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        remaining = remaining[split_at..].trim();
    }

    chunks
}

/// Shorten a diagnostic string to `max_chars` characters, marking the cut with `...`.
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated = text[..byte_offset(text, max_chars)].to_string();
        truncated.push_str("...");
        truncated
    }
}
