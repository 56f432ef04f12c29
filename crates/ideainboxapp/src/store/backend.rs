use crate::error::Result;
use std::path::PathBuf;

/// The logical keys ideainbox persists. Each is an independent whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// JSON object matching [`crate::model::Settings`].
    Settings,
    /// Plain-text draft.
    Draft,
}

impl StoreKey {
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreKey::Settings => "settings.json",
            StoreKey::Draft => "draft.md",
        }
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::InboxStore`] handles the "what" (parsing, defaults).
pub trait StorageBackend {
    /// Read the raw value for a key.
    /// Returns Ok(None) if nothing was stored.
    fn read(&self, key: StoreKey) -> Result<Option<String>>;

    /// Overwrite the value for a key.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: StoreKey, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: StoreKey) -> Result<()>;

    /// Where the key lives. For FsBackend, this is the real path.
    /// For MemBackend, a virtual path.
    fn location(&self, key: StoreKey) -> PathBuf;
}
