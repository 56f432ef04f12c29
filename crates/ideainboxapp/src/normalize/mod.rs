//! # Note Normalizer
//!
//! Turns raw free text into a [`Note`] without any external help. This is the
//! "local" enhancer, and also the contract every other enhancer must satisfy.
//!
//! ## Pipeline
//!
//! 1. **Validation**: trimmed input must be between `min_length` and
//!    `max_length` characters. Failures are [`ValidationError`]s and are never
//!    papered over here; falling back to [`Note::fallback`] is the caller's call.
//! 2. **Title** ([`title`]): first non-blank line, cleaned of file-name-unsafe
//!    characters and list markers, at most 60 characters.
//! 3. **Body** ([`body`]): markdown-ish reformatting, always starting with a
//!    `# ` heading.
//! 4. **Tags** ([`keywords`]): most frequent significant words, default tags,
//!    a length tag, and a month tag.
//!
//! ## Output Guarantees
//!
//! For any input that passes validation:
//! - `title` has 1..=60 characters
//! - `body` is non-empty and starts with `# `
//! - `tags` holds 3..=`max_tags` unique kebab-case entries
//!
//! The only ambient input is the calendar date (for the month tag), which is
//! passed in explicitly so the function stays pure.

pub mod body;
pub mod keywords;
pub mod title;

use crate::error::ValidationError;
use crate::model::Note;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the normalizer.
///
/// None of these values are load-bearing for correctness; they shape which
/// tags come out and where input is cut off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Minimum trimmed input length, in characters.
    pub min_length: usize,
    /// Maximum trimmed input length; `None` disables the cap.
    pub max_length: Option<usize>,
    /// Maximum title length, in characters.
    pub max_title_len: usize,
    /// Words shorter than this never become tags.
    pub min_word_len: usize,
    /// Words longer than this never become tags.
    pub max_word_len: usize,
    /// How many frequent words are considered for tags.
    pub top_words: usize,
    /// Tags always present, after the frequent words.
    pub default_tags: Vec<String>,
    /// Cap on the final tag list. Frequent words are dropped (least frequent
    /// first) to make room for the default and derived tags.
    pub max_tags: usize,
    /// Input shorter than this gets the `quick-note` tag.
    pub quick_threshold: usize,
    /// Input longer than this gets the `detailed` tag.
    pub detailed_threshold: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: Some(5000),
            max_title_len: 60,
            min_word_len: 4,
            max_word_len: 30,
            top_words: 5,
            default_tags: vec!["note".into(), "idea".into()],
            max_tags: 8,
            quick_threshold: 100,
            detailed_threshold: 300,
        }
    }
}

/// Checks raw input and returns it trimmed.
pub fn validate_input<'a>(
    raw: Option<&'a str>,
    config: &NormalizerConfig,
) -> Result<&'a str, ValidationError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len < config.min_length {
        return Err(ValidationError::TooShort {
            min: config.min_length,
            actual: len,
        });
    }
    if let Some(max) = config.max_length {
        if len > max {
            return Err(ValidationError::TooLong { max, actual: len });
        }
    }
    Ok(trimmed)
}

/// Normalizes raw text with the default configuration.
///
/// Accepts `&str` or `Option<&str>`; `None` is rejected like empty input.
pub fn normalize<'a>(
    raw: impl Into<Option<&'a str>>,
    today: NaiveDate,
) -> Result<Note, ValidationError> {
    normalize_with(raw, today, &NormalizerConfig::default())
}

/// Normalizes raw text using today's local date.
pub fn normalize_now<'a>(raw: impl Into<Option<&'a str>>) -> Result<Note, ValidationError> {
    normalize(raw, chrono::Local::now().date_naive())
}

pub fn normalize_with<'a>(
    raw: impl Into<Option<&'a str>>,
    today: NaiveDate,
    config: &NormalizerConfig,
) -> Result<Note, ValidationError> {
    let text = validate_input(raw.into(), config)?;

    let title = title::derive_title(text, config.max_title_len);
    let body = body::format_body(text, &title);
    let tags = keywords::derive_tags(text, today, config);

    tracing::debug!(
        title_len = title.chars().count(),
        body_len = body.len(),
        tags = ?tags,
        "normalized note locally"
    );

    Ok(Note { title, body, tags })
}
