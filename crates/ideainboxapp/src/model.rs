//! # Domain Model
//!
//! Three values flow through ideainbox:
//!
//! - [`Note`]: the structured `{title, body, tags}` produced from raw user text.
//!   Built by an enhancer (see [`crate::enhance`]) and never mutated afterwards.
//! - [`Settings`]: where notes go in the external notes app (collection + sub path).
//!   Persisted under the `settings` key as one JSON object.
//! - The draft: the raw text being typed, persisted as a plain string under the
//!   `draft` key. It has no struct of its own, see [`crate::draft`].
//!
//! ## Wire Names
//!
//! Settings are stored with camelCase keys (`collectionName`, `subPath`). Older
//! settings written as `vaultName` / `folderPath` are still accepted on load.
//! A note's body is called `content` by the enhancement service, so `content`
//! is accepted as an alias for `body`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLECTION: &str = "Main";
pub const FALLBACK_TITLE: &str = "My Note";

/// A normalized note, ready for preview and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    #[serde(alias = "content")]
    pub body: String,
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
        }
    }

    /// The minimal note used when every enhancer failed: raw text verbatim
    /// under a generic heading.
    pub fn fallback(raw: &str) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            body: format!("# {}\n\n{}", FALLBACK_TITLE, raw.trim()),
            tags: vec!["note".into(), "idea".into(), "fallback".into()],
        }
    }
}

/// User settings for the hand-off target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Target collection (vault/workspace) in the external app.
    #[serde(alias = "vaultName", default = "default_collection")]
    pub collection_name: String,
    /// Folder inside the collection; empty means root.
    #[serde(alias = "folderPath", default)]
    pub sub_path: String,
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collection_name: default_collection(),
            sub_path: String::new(),
        }
    }
}

impl Settings {
    pub fn new(collection_name: impl Into<String>, sub_path: impl Into<String>) -> Self {
        Self {
            collection_name: collection_name.into(),
            sub_path: sub_path.into(),
        }
    }

    /// Sync needs a collection to target.
    pub fn can_sync(&self) -> bool {
        !self.collection_name.trim().is_empty()
    }
}

/// The two states of the capture flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Editing,
    Preview,
}
