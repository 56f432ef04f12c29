//! # Draft Persistence
//!
//! The draft is saved shortly after the user stops typing so a reload does not
//! lose work. [`DraftDebouncer`] keeps at most one pending write:
//!
//! - every [`edit`](DraftDebouncer::edit) replaces the pending text and pushes
//!   the deadline to `now + delay`
//! - [`poll`](DraftDebouncer::poll) writes once the deadline has passed
//! - [`flush`](DraftDebouncer::flush) writes immediately (shutdown, explicit save)
//! - [`cancel`](DraftDebouncer::cancel) drops the pending write (draft discarded)
//!
//! A burst of edits inside the window therefore produces exactly one write,
//! carrying the last value. Time is passed in, never read from a clock here.

use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::InboxStore;
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingWrite {
    text: String,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct DraftDebouncer {
    delay: Duration,
    pending: Option<PendingWrite>,
}

impl Default for DraftDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DraftDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending write becomes due, if there is one.
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Records an edit, rescheduling the pending write.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(PendingWrite {
            text: text.into(),
            due: now + self.delay,
        });
    }

    /// Writes the pending draft if its deadline has passed.
    /// Returns whether a write happened.
    pub fn poll<B: StorageBackend>(&mut self, now: Instant, store: &InboxStore<B>) -> Result<bool> {
        let due = matches!(&self.pending, Some(pending) if now >= pending.due);
        if due {
            self.flush(store)
        } else {
            Ok(false)
        }
    }

    /// Writes the pending draft now, regardless of its deadline.
    ///
    /// On failure the write stays pending so a later poll can retry it.
    pub fn flush<B: StorageBackend>(&mut self, store: &InboxStore<B>) -> Result<bool> {
        let Some(pending) = self.pending.take() else {
            return Ok(false);
        };
        if let Err(e) = store.save_draft(&pending.text) {
            self.pending = Some(pending);
            return Err(e);
        }
        tracing::trace!(len = pending.text.len(), "draft persisted");
        Ok(true)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::StoreKey;
    use crate::store::mem_backend::MemBackend;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_of_edits_writes_once_with_final_value() {
        let store = InboxStore::new(MemBackend::new());
        let mut debouncer = DraftDebouncer::default();
        let start = Instant::now();

        for (i, text) in ["h", "he", "hel", "hell", "hello"].iter().enumerate() {
            let at = start + ms(100 * i as u64);
            debouncer.edit(*text, at);
            assert!(!debouncer.poll(at, &store).unwrap());
        }

        assert!(!debouncer.poll(start + ms(899), &store).unwrap());
        assert!(debouncer.poll(start + ms(900), &store).unwrap());
        assert!(!debouncer.poll(start + ms(5000), &store).unwrap());

        assert_eq!(store.backend().writes_to(StoreKey::Draft), vec!["hello"]);
    }

    #[test]
    fn test_separate_pauses_write_each_value() {
        let store = InboxStore::new(MemBackend::new());
        let mut debouncer = DraftDebouncer::new(ms(500));
        let start = Instant::now();

        debouncer.edit("first", start);
        debouncer.poll(start + ms(600), &store).unwrap();
        debouncer.edit("second", start + ms(700));
        debouncer.poll(start + ms(1300), &store).unwrap();

        assert_eq!(
            store.backend().writes_to(StoreKey::Draft),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_edit_reschedules_deadline() {
        let mut debouncer = DraftDebouncer::new(ms(500));
        let start = Instant::now();
        debouncer.edit("a", start);
        assert_eq!(debouncer.due_at(), Some(start + ms(500)));
        debouncer.edit("ab", start + ms(300));
        assert_eq!(debouncer.due_at(), Some(start + ms(800)));
    }

    #[test]
    fn test_flush_writes_immediately() {
        let store = InboxStore::new(MemBackend::new());
        let mut debouncer = DraftDebouncer::default();
        debouncer.edit("now please", Instant::now());
        assert!(debouncer.flush(&store).unwrap());
        assert!(!debouncer.is_pending());
        assert!(!debouncer.flush(&store).unwrap());
        assert_eq!(store.load_draft().as_deref(), Some("now please"));
    }

    #[test]
    fn test_cancel_drops_pending_write() {
        let store = InboxStore::new(MemBackend::new());
        let mut debouncer = DraftDebouncer::default();
        let start = Instant::now();
        debouncer.edit("never saved", start);
        debouncer.cancel();
        assert!(!debouncer.poll(start + ms(10_000), &store).unwrap());
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_failed_write_stays_pending() {
        let store = InboxStore::new(MemBackend::new());
        let mut debouncer = DraftDebouncer::default();
        let start = Instant::now();
        debouncer.edit("retry me", start);

        store.backend().set_simulate_write_error(true);
        assert!(debouncer.poll(start + ms(600), &store).is_err());
        assert!(debouncer.is_pending());

        store.backend().set_simulate_write_error(false);
        assert!(debouncer.poll(start + ms(700), &store).unwrap());
        assert_eq!(store.load_draft().as_deref(), Some("retry me"));
    }
}
