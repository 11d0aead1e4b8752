//! Response cleanup
//!
//! Small generation models echo the prompt and run on past the point of
//! usefulness. This pass strips the echoed prefix, keeps the first few
//! sentences, and guarantees terminal punctuation. Pure and deterministic.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of text up to and including its sentence-ending punctuation
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence regex is valid"));

/// Blank-line paragraph boundary, used when no sentence boundary exists
static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank-line regex is valid"));

/// Clean raw generated text into a reply of at most `limit` sentences
/// ending in `.`, `!` or `?`.
pub fn clean_response(raw: &str, prompt: &str, limit: usize) -> String {
    // The model may return the full text including the prompt; drop it.
    let stripped = raw.strip_prefix(prompt).unwrap_or(raw).trim();

    let mut pieces: Vec<String> = Vec::new();
    let mut last_end = 0;
    for m in SENTENCE_RE.find_iter(stripped) {
        pieces.push(m.as_str().trim().to_string());
        last_end = m.end();
    }

    if pieces.is_empty() {
        // No sentence boundary at all; fall back to paragraph splitting.
        pieces = BLANK_LINE_RE
            .split(stripped)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
    } else {
        // Keep a trailing unterminated fragment as its own piece.
        let tail = stripped[last_end..].trim();
        if !tail.is_empty() {
            pieces.push(tail.to_string());
        }
    }

    let mut cleaned = pieces
        .into_iter()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();

    if !cleaned.ends_with(['.', '!', '?']) {
        cleaned.push('.');
    }

    cleaned
}
