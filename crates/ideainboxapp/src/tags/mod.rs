//! Tag support.
//!
//! Tags are stored bare (`idea`, `quick-note`) and rendered with a single
//! leading `#` marker at display/export time. Tags coming from outside the
//! local normalizer (an enhancement service, a hand-edited note) may already
//! carry the marker, so every renderer goes through [`format_tag`], which
//! never doubles it.
//!
//! ## Tag Naming Rules
//!
//! See [`validation`] for the rules. In summary: lowercase kebab-case,
//! `[a-z0-9-]`, no leading/trailing/consecutive hyphens.

pub mod validation;

use std::collections::HashSet;

pub use validation::{validate_tag_name, TagValidationError};

pub const TAG_MARKER: char = '#';

/// Renders a tag with exactly one leading `#`.
pub fn format_tag(tag: &str) -> String {
    let tag = tag.trim();
    if tag.starts_with(TAG_MARKER) {
        tag.to_string()
    } else {
        format!("{}{}", TAG_MARKER, tag)
    }
}

/// Renders a tag list as a single space-separated line (`#idea #note`).
///
/// Blank tags are skipped. Formatting an already formatted list yields the
/// same line.
pub fn format_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.trim().trim_start_matches(TAG_MARKER).is_empty())
        .map(format_tag)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Coerces arbitrary text into a kebab-case tag.
///
/// Drops the `#` marker, lowercases, turns whitespace and underscores into
/// hyphens, drops anything else outside `[a-z0-9-]`, and collapses hyphen runs.
/// May return an empty string.
pub fn to_kebab_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim().trim_start_matches(TAG_MARKER).chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if (ch == '-' || ch == '_' || ch.is_whitespace()) && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

/// Removes duplicates, keeping the first occurrence of each tag.
pub fn dedupe_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Cleans a tag list of unknown provenance: every entry is coerced to a valid
/// kebab-case tag, empties dropped, duplicates removed.
pub fn sanitize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let cleaned = tags
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            if validate_tag_name(raw).is_ok() {
                return Some(raw.to_string());
            }
            let tag = to_kebab_case(raw);
            match validate_tag_name(&tag) {
                Ok(()) => Some(tag),
                Err(e) => {
                    tracing::debug!("dropping tag {:?}: {}", raw, e);
                    None
                }
            }
        })
        .collect();
    dedupe_tags(cleaned)
}
