//! # API Facade
//!
//! [`InboxApi`] is the session controller: the single entry point every UI
//! drives. It owns the state the capture flow needs and dispatches to the
//! command layer for the actual work.
//!
//! ## Owned State
//!
//! - [`Settings`]: loaded once at construction, replaced only by a successful
//!   [`save_settings`](InboxApi::save_settings). Nothing else reads settings
//!   from storage.
//! - The draft text and its [`DraftDebouncer`].
//! - The [`ViewState`] (`Editing` / `Preview`) and the previewed [`Note`].
//! - The in-flight flag: one `process` at a time.
//!
//! ## State Machine
//!
//! ```text
//!             process ok
//!   Editing ─────────────► Preview ──sync──► Preview (unchanged, ok or not)
//!     ▲  │ process err         │
//!     │  └──► Editing          │ back_to_edit / discard
//!     └────────────────────────┘
//! ```
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: enhancement, payload building, and hand-off
//!   reporting live in `commands/*.rs`.
//! - **I/O to the user**: no stdout, prompts, or exit codes.
//! - **Clock reads**: draft timing takes `Instant`s from the caller.
//!
//! ## Generic Over Backend and Enhancer
//!
//! `InboxApi<B: StorageBackend, E: Enhancer>`:
//! - Production: `InboxApi<FsBackend, Box<dyn Enhancer>>`
//! - Testing: `InboxApi<MemBackend, StubEnhancer>`

use crate::commands::{self, CmdResult};
use crate::draft::DraftDebouncer;
use crate::enhance::{Enhancer, LocalEnhancer};
use crate::error::{InboxError, Result};
use crate::handoff::Handoff;
use crate::model::{Note, Settings, ViewState};
use crate::store::backend::StorageBackend;
use crate::store::InboxStore;
use std::time::{Duration, Instant};

pub struct InboxApi<B: StorageBackend, E: Enhancer> {
    store: InboxStore<B>,
    enhancer: E,
    local: LocalEnhancer,
    settings: Settings,
    draft: String,
    debouncer: DraftDebouncer,
    view: ViewState,
    note: Option<Note>,
    in_flight: bool,
}

impl<B: StorageBackend, E: Enhancer> InboxApi<B, E> {
    /// Starts a session: settings and any saved draft are loaded here, once.
    pub fn new(
        store: InboxStore<B>,
        enhancer: E,
        local: LocalEnhancer,
        debounce: Duration,
    ) -> Self {
        let settings = store.load_settings();
        let draft = store.load_draft().unwrap_or_default();
        Self {
            store,
            enhancer,
            local,
            settings,
            draft,
            debouncer: DraftDebouncer::new(debounce),
            view: ViewState::Editing,
            note: None,
            in_flight: false,
        }
    }

    pub fn store(&self) -> &InboxStore<B> {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight
    }

    // --- draft ---

    /// Records an edit; the write happens on a later [`tick`](Self::tick).
    pub fn edit_draft(&mut self, text: impl Into<String>, now: Instant) {
        self.draft = text.into();
        self.debouncer.edit(self.draft.clone(), now);
    }

    /// Writes the draft if the debounce window has passed.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        self.debouncer.poll(now, &self.store)
    }

    pub fn flush_draft(&mut self) -> Result<bool> {
        self.debouncer.flush(&self.store)
    }

    pub fn show_draft(&self) -> CmdResult {
        commands::draft::show(&self.store)
    }

    pub fn draft_location(&self) -> String {
        commands::draft::location(&self.store)
    }

    // --- processing ---

    /// Enhances `raw` and, on success, switches to `Preview`.
    ///
    /// Rejected while another request is in flight. On a validation error the
    /// view stays in `Editing` and the error is returned.
    pub fn process(&mut self, raw: &str) -> Result<CmdResult> {
        if self.in_flight {
            return Err(InboxError::Api(
                "A note is already being processed".to_string(),
            ));
        }

        self.in_flight = true;
        let outcome = commands::process::run(&self.enhancer, &self.local, raw);
        self.in_flight = false;

        let result = outcome?;
        self.note = result.note.clone();
        self.view = ViewState::Preview;
        Ok(result)
    }

    /// Processes the current draft text.
    pub fn process_draft(&mut self) -> Result<CmdResult> {
        let draft = self.draft.clone();
        self.process(&draft)
    }

    /// Leaves the preview; the draft text is kept for further editing.
    pub fn back_to_edit(&mut self) -> CmdResult {
        self.view = ViewState::Editing;
        self.note = None;
        CmdResult::default()
    }

    // --- hand-off ---

    /// Hands the previewed note to `sink`.
    ///
    /// A failed hand-off comes back as an error-level message in the result;
    /// the session state is left untouched either way.
    pub fn sync(&self, sink: &dyn Handoff) -> Result<CmdResult> {
        let note = match (&self.view, &self.note) {
            (ViewState::Preview, Some(note)) => note,
            _ => {
                return Err(InboxError::Api(
                    "Nothing to send: process a note first".to_string(),
                ))
            }
        };
        if !self.settings.can_sync() {
            return Err(InboxError::Api(
                "No collection set: use `settings --collection <name>`".to_string(),
            ));
        }
        Ok(commands::send::run(note, &self.settings, sink))
    }

    // --- settings ---

    /// Persists `settings` and adopts them. On a write error the previous
    /// settings stay in effect.
    pub fn save_settings(&mut self, settings: Settings) -> Result<CmdResult> {
        let result = commands::settings::save(&self.store, &settings)?;
        self.settings = settings;
        Ok(result)
    }

    pub fn show_settings(&self) -> CmdResult {
        commands::settings::show(&self.settings)
    }

    // --- discard ---

    /// Drops the note and the draft (memory and storage) and returns to
    /// `Editing`. Settings are not touched.
    /// On a storage error nothing changes, in memory or on disk.
    pub fn discard(&mut self) -> Result<CmdResult> {
        self.store.clear_draft()?;
        self.debouncer.cancel();
        self.draft.clear();
        self.note = None;
        self.view = ViewState::Editing;
        let mut result = CmdResult::default();
        result.add_message(commands::CmdMessage::info("Draft discarded"));
        Ok(result)
    }
}
