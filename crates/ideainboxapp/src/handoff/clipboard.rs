use super::{Handoff, HandoffMethod, HandoffReceipt};
use crate::error::{InboxError, Result};
use crate::model::Settings;
use crate::payload::Payload;
use std::io::Write;
use std::process::{Command, Stdio};

fn clipboard_error(reason: impl Into<String>) -> InboxError {
    InboxError::handoff(HandoffMethod::Clipboard, reason)
}

/// Clipboard tools to try, in order, on this platform.
#[cfg(target_os = "macos")]
const TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "linux")]
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];
#[cfg(target_os = "windows")]
const TOOLS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const TOOLS: &[(&str, &[&str])] = &[];

/// Copies `text` with the first clipboard tool that works.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in TOOLS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard tool failed");
                last_error = Some(e);
            }
        }
    }
    let names: Vec<&str> = TOOLS.iter().map(|(program, _)| *program).collect();
    Err(match last_error {
        Some(InboxError::Handoff { reason, .. }) if names.len() > 1 => {
            let tools = names.join(", ");
            clipboard_error(format!("{}. Install one of: {}", reason, tools))
        }
        Some(e) => e,
        None => clipboard_error("No clipboard tool for this platform"),
    })
}

/// Feeds `text` to `program` on stdin; fails unless it exits cleanly.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| clipboard_error(format!("cannot run {}: {}", program, e)))?;

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    // stdin is closed here so the tool sees EOF before we wait on it
    let status = child
        .wait()
        .map_err(|e| clipboard_error(format!("{} did not finish: {}", program, e)))?;
    if let Err(e) = written {
        return Err(clipboard_error(format!("cannot write to {}: {}", program, e)));
    }
    if !status.success() {
        let reason = format!("{} exited with {}", program, status);
        return Err(clipboard_error(reason));
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardHandoff;

impl Handoff for ClipboardHandoff {
    fn method(&self) -> HandoffMethod {
        HandoffMethod::Clipboard
    }

    fn deliver(&self, payload: &Payload, _settings: &Settings) -> Result<HandoffReceipt> {
        copy_to_clipboard(&payload.export_text)?;
        tracing::info!(bytes = payload.export_text.len(), "note copied to clipboard");
        Ok(HandoffReceipt::new(HandoffMethod::Clipboard))
    }
}
