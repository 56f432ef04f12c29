//! Terminal styles.
//!
//! Code refers to semantic names (a note title, a tag, a success message),
//! never to raw colors. `console` drops the escape codes on its own when
//! output is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static TAGS: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(243));
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
pub static KEY: Lazy<Style> = Lazy::new(|| Style::new().color256(172));
