//! # Command Layer
//!
//! The business logic behind each user action, as plain functions over domain
//! types. Commands are UI-agnostic: no stdout, no prompts, no exit codes.
//! Session state (view, current note, settings in memory) is owned by
//! [`InboxApi`](crate::api::InboxApi), which calls into these functions and
//! applies their outcome.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`] rather than strings:
//! - `note`: the note produced or currently previewed
//! - `source`: which enhancer produced it
//! - `payload` / `receipt`: what was handed off, and how
//! - `settings` / `draft`: values for the `settings` and `draft` views
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! The CLI decides how to render them.
//!
//! ## Command Modules
//!
//! - [`process`]: enhance raw text into a note, with fallback
//! - [`send`]: build the payload and hand it off
//! - [`settings`]: persist user settings
//! - [`draft`]: inspect the persisted draft

use crate::enhance::NoteSource;
use crate::handoff::HandoffReceipt;
use crate::model::{Note, Settings};
use crate::payload::Payload;
use serde::Serialize;

pub mod draft;
pub mod process;
pub mod send;
pub mod settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    /// Warnings and errors are problems; the CLI routes them to stderr.
    pub fn is_problem(&self) -> bool {
        matches!(self.level, MessageLevel::Warning | MessageLevel::Error)
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<NoteSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<HandoffReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Puts `earlier` messages ahead of this result's own.
    pub fn prepend_messages(&mut self, earlier: Vec<CmdMessage>) {
        let own = std::mem::replace(&mut self.messages, earlier);
        self.messages.extend(own);
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Whether any message is error-level.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
