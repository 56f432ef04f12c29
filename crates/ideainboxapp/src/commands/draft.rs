use crate::commands::{CmdMessage, CmdResult};
use crate::store::backend::{StorageBackend, StoreKey};
use crate::store::InboxStore;

pub fn show<B: StorageBackend>(store: &InboxStore<B>) -> CmdResult {
    let mut result = CmdResult::default();
    match store.load_draft() {
        Some(draft) if !draft.trim().is_empty() => result.draft = Some(draft),
        _ => result.add_message(CmdMessage::info("No saved draft.")),
    }
    result
}

/// Where the draft lives, for messages.
pub fn location<B: StorageBackend>(store: &InboxStore<B>) -> String {
    store.location(StoreKey::Draft).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_show_saved_draft() {
        let store = InboxStore::new(MemBackend::new().with_value(StoreKey::Draft, "half done"));
        let result = show(&store);
        assert_eq!(result.draft.as_deref(), Some("half done"));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_show_without_draft() {
        let store = InboxStore::new(MemBackend::new());
        let result = show(&store);
        assert_eq!(result.draft, None);
        assert_eq!(result.messages[0].content, "No saved draft.");
    }

    #[test]
    fn test_location() {
        let store = InboxStore::new(MemBackend::new());
        assert_eq!(location(&store), "memory://draft.md");
    }
}
