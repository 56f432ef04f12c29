//! # ideainbox CLI
//!
//! The binary is thin: the CLI lives in `src/cli/` and this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/ideainbox/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                          │
//! │  - logging setup, context wiring, dispatch (commands.rs)     │
//! │  - terminal rendering with console styles (render.rs)        │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (ideainboxapp::api)                               │
//! │  - session state: settings, draft, view, in-flight flag      │
//! │  - returns structured `CmdResult` values                     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command + Domain Layers (ideainboxapp::commands, ...)       │
//! │  - enhancement, payload building, hand-off, storage          │
//! │  - no knowledge of stdout/stderr or process exits            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Library logic is unit tested in `ideainboxapp`.
//! - Rendering is tested with canned `CmdResult`s in `cli/render.rs`.
//! - End-to-end runs of the binary live in `tests/cli.rs`, each against its
//!   own temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
