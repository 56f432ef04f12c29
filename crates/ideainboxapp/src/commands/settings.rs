use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Settings;
use crate::store::backend::StorageBackend;
use crate::store::InboxStore;

/// Persists `settings` as one whole object.
pub fn save<B: StorageBackend>(store: &InboxStore<B>, settings: &Settings) -> Result<CmdResult> {
    store.save_settings(settings)?;

    let mut result = CmdResult::default().with_settings(settings.clone());
    result.add_message(CmdMessage::success("Settings saved"));
    if !settings.can_sync() {
        result.add_message(CmdMessage::warning(
            "No collection set: sending via link is disabled until you set one",
        ));
    }
    Ok(result)
}

pub fn show(settings: &Settings) -> CmdResult {
    CmdResult::default().with_settings(settings.clone())
}
