//! # Storage Layer
//!
//! ideainbox persists exactly two independent values:
//!
//! | key        | shape                          | written                  |
//! |------------|--------------------------------|--------------------------|
//! | `settings` | JSON object ([`Settings`])     | on explicit save         |
//! | `draft`    | plain text                     | debounced after edits    |
//!
//! Writes are whole-value overwrites; clearing one key never touches the other.
//!
//! ## Tolerant Reads
//!
//! Stored data may be missing, hand-edited, or written by an older version.
//! [`InboxStore::load_settings`] therefore never fails: absent, unreadable,
//! or malformed settings fall back to [`Settings::default`] with a warning.
//! Writes, on the other hand, report errors so the caller can keep its
//! previous in-memory state.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per key under the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── ideainbox.toml   # Configuration (see crate::config)
//! ├── settings.json    # Settings
//! └── draft.md         # Draft text
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use crate::error::Result;
use crate::model::Settings;
use backend::{StorageBackend, StoreKey};

pub struct InboxStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> InboxStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load_settings(&self) -> Settings {
        let raw = match self.backend.read(StoreKey::Settings) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Settings::default(),
            Err(e) => {
                tracing::warn!("cannot read settings, using defaults: {}", e);
                return Settings::default();
            }
        };
        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("malformed settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        self.backend.write(StoreKey::Settings, &json)
    }

    /// The persisted draft, if any. Read errors count as no draft.
    pub fn load_draft(&self) -> Option<String> {
        match self.backend.read(StoreKey::Draft) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!("cannot read draft: {}", e);
                None
            }
        }
    }

    pub fn save_draft(&self, text: &str) -> Result<()> {
        self.backend.write(StoreKey::Draft, text)
    }

    pub fn clear_draft(&self) -> Result<()> {
        self.backend.remove(StoreKey::Draft)
    }

    pub fn location(&self, key: StoreKey) -> std::path::PathBuf {
        self.backend.location(key)
    }
}
