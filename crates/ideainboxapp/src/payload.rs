//! # Sync Payload
//!
//! Everything a hand-off needs, derived deterministically from a [`Note`] and
//! the user's [`Settings`]:
//!
//! - `export_text`: `body`, a blank line, then the `#tag` line. Clipboard copy
//!   and file download both use these exact bytes.
//! - `file_base_name`: the title with every character outside `[A-Za-z0-9]`
//!   replaced by `_` (`"My Idea!"` → `"My_Idea_"`), or `"note"` when the title
//!   has nothing alphanumeric.
//! - `destination_ref`: `sub_path/file_base_name`, or just the file base name
//!   when no sub path is set.
//!
//! ## Deep Links
//!
//! [`DeepLink`] embeds the payload in a custom-scheme URI. Collection name,
//! destination path and export text are percent-escaped one by one; the
//! composed destination is never escaped as a whole, so its `/` separators are
//! escaped exactly once.

use crate::model::{Note, Settings};
use crate::tags::format_tags;
use serde::Serialize;

pub const DEFAULT_FILE_BASE_NAME: &str = "note";
pub const EXPORT_EXTENSION: &str = "md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub file_base_name: String,
    pub export_text: String,
    pub destination_ref: String,
}

impl Payload {
    /// File name for downloads (`My_Idea_.md`).
    pub fn download_file_name(&self) -> String {
        format!("{}.{}", self.file_base_name, EXPORT_EXTENSION)
    }
}

/// Builds the hand-off payload. Never fails; an empty collection name is left
/// for the hand-off to reject.
pub fn build_payload(note: &Note, settings: &Settings) -> Payload {
    let file_base_name = file_base_name(&note.title);
    let destination_ref = destination_ref(&settings.sub_path, &file_base_name);
    Payload {
        export_text: export_text(note),
        file_base_name,
        destination_ref,
    }
}

pub fn export_text(note: &Note) -> String {
    let tag_line = format_tags(&note.tags);
    if tag_line.is_empty() {
        note.body.clone()
    } else {
        format!("{}\n\n{}", note.body, tag_line)
    }
}

pub fn file_base_name(title: &str) -> String {
    if !title.chars().any(|c| c.is_ascii_alphanumeric()) {
        return DEFAULT_FILE_BASE_NAME.to_string();
    }
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Trims the sub path and strips leading/trailing slashes.
pub fn normalize_sub_path(sub_path: &str) -> &str {
    sub_path.trim().trim_matches('/')
}

pub fn destination_ref(sub_path: &str, file_base_name: &str) -> String {
    let sub_path = normalize_sub_path(sub_path);
    if sub_path.is_empty() {
        file_base_name.to_string()
    } else {
        format!("{}/{}", sub_path, file_base_name)
    }
}

/// Custom-scheme URI layout, e.g. `notes://new?collection=..&file=..&content=..`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub scheme: String,
    pub action: String,
    pub collection_param: String,
    pub file_param: String,
    pub content_param: String,
}

impl Default for DeepLink {
    fn default() -> Self {
        Self {
            scheme: "notes".to_string(),
            action: "new".to_string(),
            collection_param: "collection".to_string(),
            file_param: "file".to_string(),
            content_param: "content".to_string(),
        }
    }
}

impl DeepLink {
    pub fn new(scheme: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn uri(&self, payload: &Payload, settings: &Settings) -> String {
        format!(
            "{}://{}?{}={}&{}={}&{}={}",
            self.scheme,
            self.action,
            self.collection_param,
            urlencoding::encode(&settings.collection_name),
            self.file_param,
            urlencoding::encode(&payload.destination_ref),
            self.content_param,
            urlencoding::encode(&payload.export_text),
        )
    }
}
