//! Title derivation.
//!
//! The title doubles as a file name in the external app, so it must not carry
//! characters that file systems reject (`< > : " / \ | ? *`). Markdown
//! decoration (`#`, backticks, brackets) is dropped as well.

pub const DEFAULT_TITLE: &str = "Quick Note";

/// Fallback titles are built from this many significant words.
const FALLBACK_WORDS: usize = 5;

/// Significant words are longer than this many characters.
const SIGNIFICANT_WORD_LEN: usize = 3;

fn is_unsafe_char(ch: char) -> bool {
    matches!(
        ch,
        '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | '#' | '`' | '[' | ']' | '(' | ')'
            | '{' | '}'
    )
}

/// Strips a leading bullet (`- `, `* `, `+ `) or numbered (`1. `, `1) `) marker.
pub fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start();
    for bullet in ["- ", "* ", "+ "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return rest;
        }
    }
    if let Some(rest) = strip_number_marker(line) {
        return rest;
    }
    line
}

/// Returns the text after `N.` / `N)` and at least one space, if present.
pub(crate) fn strip_number_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else if rest.is_empty() {
        Some(rest)
    } else {
        None
    }
}

/// Removes unsafe characters, trims, and truncates to `max_len` characters.
pub fn sanitize_title(raw: &str, max_len: usize) -> String {
    let cleaned: String = raw.chars().filter(|c| !is_unsafe_char(*c)).collect();
    let truncated: String = cleaned.trim().chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

/// Derives a title from trimmed, non-empty note text.
pub fn derive_title(text: &str, max_len: usize) -> String {
    let first_line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    let title = sanitize_title(strip_list_marker(first_line), max_len);
    if title.chars().count() >= 2 {
        return title;
    }

    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().count() > SIGNIFICANT_WORD_LEN)
        .take(FALLBACK_WORDS)
        .collect();
    let title = sanitize_title(&words.join(" "), max_len);
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
