use super::backend::{StorageBackend, StoreKey};
use crate::error::{InboxError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each key as a file under one data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InboxError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        let path = self.location(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InboxError::Io(e)),
        }
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let target = self.location(key);

        // write to a sibling temp file, then rename over the target
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key.file_name(), Uuid::new_v4()));
        let written = fs::write(&tmp_path, value).and_then(|()| fs::rename(&tmp_path, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(InboxError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        match fs::remove_file(self.location(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(InboxError::Io(e)),
        }
    }

    fn location(&self, key: StoreKey) -> PathBuf {
        self.root.join(key.file_name())
    }
}
