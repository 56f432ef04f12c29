//! # Hand-off
//!
//! Getting a [`Payload`] into the external notes app. Three interchangeable
//! sinks implement [`Handoff`]:
//!
//! - [`clipboard::ClipboardHandoff`]: copies `export_text` to the system clipboard.
//! - [`download::DownloadHandoff`]: writes `export_text` to `<file_base_name>.md`.
//! - [`deeplink::DeepLinkHandoff`]: opens a custom-scheme URI carrying the payload.
//!
//! None of them can confirm that the external app actually received the note;
//! success means "handed over without a local error". Failures are
//! [`InboxError::Handoff`] and are never fatal: the session reports them with a
//! hint to try another method.

pub mod clipboard;
pub mod deeplink;
pub mod download;

use crate::error::{InboxError, Result};
use crate::model::Settings;
use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffMethod {
    Clipboard,
    Download,
    Link,
}

impl HandoffMethod {
    pub const ALL: [HandoffMethod; 3] = [
        HandoffMethod::Link,
        HandoffMethod::Clipboard,
        HandoffMethod::Download,
    ];

    /// The other methods, in the order they are suggested.
    pub fn alternatives(&self) -> Vec<HandoffMethod> {
        Self::ALL.into_iter().filter(|m| m != self).collect()
    }
}

impl std::fmt::Display for HandoffMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandoffMethod::Clipboard => write!(f, "clipboard"),
            HandoffMethod::Download => write!(f, "download"),
            HandoffMethod::Link => write!(f, "link"),
        }
    }
}

/// What a successful hand-off did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandoffReceipt {
    pub method: HandoffMethod,
    /// File written, for downloads.
    pub path: Option<PathBuf>,
    /// URI opened, for deep links.
    pub uri: Option<String>,
}

impl HandoffReceipt {
    pub fn new(method: HandoffMethod) -> Self {
        Self {
            method,
            path: None,
            uri: None,
        }
    }
}

pub trait Handoff {
    fn method(&self) -> HandoffMethod;

    fn deliver(&self, payload: &Payload, settings: &Settings) -> Result<HandoffReceipt>;
}

/// A user-facing hint naming the other hand-off methods.
pub fn suggest_alternatives(failed: HandoffMethod) -> String {
    let names: Vec<String> = failed
        .alternatives()
        .iter()
        .map(|m| format!("`send --via {}`", m))
        .collect();
    format!("Try another way to send the note: {}", names.join(" or "))
}

/// Convenience for sinks that need a collection to target.
pub(crate) fn require_collection(method: HandoffMethod, settings: &Settings) -> Result<()> {
    if settings.can_sync() {
        Ok(())
    } else {
        Err(InboxError::handoff(
            method,
            "no collection configured (set one with `settings --collection <name>`)",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternatives_exclude_failed_method() {
        assert_eq!(
            HandoffMethod::Link.alternatives(),
            vec![HandoffMethod::Clipboard, HandoffMethod::Download]
        );
        assert_eq!(
            HandoffMethod::Clipboard.alternatives(),
            vec![HandoffMethod::Link, HandoffMethod::Download]
        );
    }

    #[test]
    fn test_suggestion_mentions_alternatives() {
        let hint = suggest_alternatives(HandoffMethod::Clipboard);
        assert!(hint.contains("--via link"));
        assert!(hint.contains("--via download"));
        assert!(!hint.contains("--via clipboard"));
    }

    #[test]
    fn test_require_collection() {
        assert!(require_collection(HandoffMethod::Link, &Settings::default()).is_ok());
        let err = require_collection(HandoffMethod::Link, &Settings::new("", "")).unwrap_err();
        assert!(err.to_string().starts_with("Could not send via link"));
    }
}
