//! # ideainboxapp
//!
//! Capture a quick idea as free text, turn it into a structured note, and hand
//! it to an external note-taking app.
//!
//! ```text
//! raw text ──► Enhancer ──► Note ──► preview ──► Payload ──► Handoff
//!              (service,                         (export     (link,
//!               falls back                        text,       clipboard,
//!               to local)                         file name,  download)
//!                                                 dest ref)
//! ```
//!
//! ## Architecture
//!
//! The crate is UI-agnostic and layered the same way top to bottom:
//!
//! 1. **API** ([`api`]): [`api::InboxApi`], the session controller. Owns
//!    settings, the draft, view state and the in-flight flag.
//! 2. **Commands** ([`commands`]): the logic of each action, returning a
//!    structured [`commands::CmdResult`].
//! 3. **Domain**: [`normalize`] (local heuristics), [`enhance`] (enhancer
//!    variants and fallback), [`payload`] (export text, file name, deep link),
//!    [`handoff`] (sinks), [`draft`] (debounced draft writes).
//! 4. **Storage** ([`store`]): settings and draft behind a
//!    [`store::backend::StorageBackend`], on disk or in memory.
//!
//! The library never prints and never exits; the `ideainbox` binary does both.
//!
//! ## Quick Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ideainboxapp::model::Settings;
//! use ideainboxapp::normalize::normalize;
//! use ideainboxapp::payload::build_payload;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let note = normalize("Buy milk\nCall mom\nFinish report", today).unwrap();
//! assert_eq!(note.title, "Buy milk");
//!
//! let payload = build_payload(&note, &Settings::new("Main", "Inbox"));
//! assert_eq!(payload.destination_ref, "Inbox/Buy_milk");
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod enhance;
pub mod error;
pub mod handoff;
pub mod init;
pub mod model;
pub mod normalize;
pub mod payload;
pub mod store;
pub mod tags;
