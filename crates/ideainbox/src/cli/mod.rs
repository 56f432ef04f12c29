//! # CLI Behavior
//!
//! This is **one possible UI client** for ideainbox. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## The Capture Flow on the Command Line
//!
//! The web-style flow (type, preview, send) maps onto subcommands that share
//! the persisted draft:
//!
//! 1. `ideainbox process "text"`: saves the text as the draft and prints the
//!    preview. Piped input works too: `pbpaste | ideainbox process`.
//! 2. `ideainbox send --via download`: processes the draft (or the given
//!    text) and hands it off. On success the draft is cleared.
//!
//! With no text argument and nothing piped in, both commands use the saved
//! draft. Naked `ideainbox` shows the draft.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: logging, context setup, and per-command handlers
//! - `render`: output formatting
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
