use super::backend::{StorageBackend, StoreKey};
use crate::error::{InboxError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// Backend kept entirely in memory, for tests.
///
/// Besides the current values it records a log of successful writes, so
/// draft-debounce tests can assert how many times (and with what text) the
/// draft actually reached storage. Mutation goes through `RefCell`; the app
/// never shares a store across threads.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<StoreKey, String>>,
    log: RefCell<Vec<(StoreKey, String)>>,
    failing: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` as if it had been written by an earlier session.
    /// Seeded values do not show up in [`writes`](Self::writes).
    pub fn with_value(self, key: StoreKey, value: &str) -> Self {
        self.values.borrow_mut().insert(key, value.to_owned());
        self
    }

    /// While set, every write and remove fails with a store error.
    pub fn set_simulate_write_error(&self, fail: bool) {
        self.failing.set(fail);
    }

    pub fn writes(&self) -> Vec<(StoreKey, String)> {
        self.log.borrow().clone()
    }

    pub fn writes_to(&self, key: StoreKey) -> Vec<String> {
        let log = self.log.borrow();
        log.iter()
            .filter_map(|(k, v)| (*k == key).then(|| v.clone()))
            .collect()
    }

    fn check_writable(&self, key: StoreKey) -> Result<()> {
        if self.failing.get() {
            return Err(InboxError::Store(format!(
                "simulated failure writing {}",
                key.file_name()
            )));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.values.borrow().get(&key).cloned())
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<()> {
        self.check_writable(key)?;
        self.values.borrow_mut().insert(key, value.to_owned());
        self.log.borrow_mut().push((key, value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<()> {
        self.check_writable(key)?;
        self.values.borrow_mut().remove(&key);
        Ok(())
    }

    fn location(&self, key: StoreKey) -> PathBuf {
        PathBuf::from(format!("memory://{}", key.file_name()))
    }
}
