use crate::commands::{CmdMessage, CmdResult};
use crate::handoff::{suggest_alternatives, Handoff, HandoffMethod};
use crate::model::{Note, Settings};
use crate::payload::build_payload;

/// Builds the payload for `note` and hands it to `sink`.
///
/// Hand-off failures are not errors at this level: they become an
/// error-level message plus a hint naming the other methods, and the caller's
/// state stays as it was so the user can retry.
pub fn run(note: &Note, settings: &Settings, sink: &dyn Handoff) -> CmdResult {
    let payload = build_payload(note, settings);
    let mut result = CmdResult::default().with_note(note.clone());

    match sink.deliver(&payload, settings) {
        Ok(receipt) => {
            result.add_message(CmdMessage::success(success_message(
                sink.method(),
                &payload.destination_ref,
                receipt.path.as_deref(),
            )));
            result.receipt = Some(receipt);
        }
        Err(e) => {
            tracing::warn!("hand-off via {} failed: {}", sink.method(), e);
            result.add_message(CmdMessage::error(e.to_string()));
            result.add_message(CmdMessage::info(suggest_alternatives(sink.method())));
        }
    }
    result.payload = Some(payload);
    result
}

fn success_message(
    method: HandoffMethod,
    destination: &str,
    path: Option<&std::path::Path>,
) -> String {
    match (method, path) {
        (HandoffMethod::Download, Some(path)) => format!("Saved note to {}", path.display()),
        (HandoffMethod::Clipboard, _) => {
            "Copied note to clipboard, paste it into your notes app".to_string()
        }
        _ => format!("Sent note to {}", destination),
    }
}
