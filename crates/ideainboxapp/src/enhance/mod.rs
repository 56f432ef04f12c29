//! # Enhancers
//!
//! An [`Enhancer`] turns raw text into a [`Note`]. There are two variants:
//!
//! - [`LocalEnhancer`]: the offline heuristics in [`crate::normalize`].
//! - [`ServiceEnhancer`]: one request/response exchange with an external
//!   text-enhancement service, whose answer is validated and completed so it
//!   satisfies the same contract as the local normalizer.
//!
//! Which one runs first is configuration ([`EnhancerKind`]). Whatever the
//! primary is, [`enhance_with_fallback`] guarantees the user reaches a preview:
//!
//! ```text
//! primary ──ok──────────────────────────────► note
//!    │ validation error ──────────────────────► error (user must fix input)
//!    │ other error
//!    ▼
//! local ───ok──────────────────────────────► note (fallback)
//!    │ other error
//!    ▼
//! Note::fallback(raw) ──────────────────────► note (minimal)
//! ```

pub mod local;
pub mod service;

use crate::error::Result;
use crate::model::Note;
use serde::{Deserialize, Serialize};

pub use local::LocalEnhancer;
pub use service::ServiceEnhancer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancerKind {
    #[default]
    Local,
    Service,
}

impl std::fmt::Display for EnhancerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnhancerKind::Local => write!(f, "local"),
            EnhancerKind::Service => write!(f, "service"),
        }
    }
}

impl std::str::FromStr for EnhancerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(EnhancerKind::Local),
            "service" => Ok(EnhancerKind::Service),
            other => Err(format!("unknown enhancer: {}", other)),
        }
    }
}

/// Produces a [`Note`] from raw text.
pub trait Enhancer {
    fn kind(&self) -> EnhancerKind;

    fn enhance(&self, raw: &str) -> Result<Note>;
}

impl Enhancer for Box<dyn Enhancer> {
    fn kind(&self) -> EnhancerKind {
        (**self).kind()
    }

    fn enhance(&self, raw: &str) -> Result<Note> {
        (**self).enhance(raw)
    }
}

/// Where the note in an [`Enhanced`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    Service,
    Local,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Enhanced {
    pub note: Note,
    pub source: NoteSource,
    /// Why the primary enhancer was bypassed, if it was.
    pub fallback_reason: Option<String>,
}

impl Enhanced {
    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

fn source_of(kind: EnhancerKind) -> NoteSource {
    match kind {
        EnhancerKind::Local => NoteSource::Local,
        EnhancerKind::Service => NoteSource::Service,
    }
}

/// Runs `primary`, falling back to `local` and then to [`Note::fallback`].
///
/// Validation errors are returned unchanged from either step.
pub fn enhance_with_fallback(
    primary: &dyn Enhancer,
    local: &dyn Enhancer,
    raw: &str,
) -> Result<Enhanced> {
    let primary_err = match primary.enhance(raw) {
        Ok(note) => {
            return Ok(Enhanced {
                note,
                source: source_of(primary.kind()),
                fallback_reason: None,
            })
        }
        Err(e) if e.is_validation() => return Err(e),
        Err(e) => e,
    };

    tracing::warn!(
        "{} enhancer failed, using local processing: {}",
        primary.kind(),
        primary_err
    );

    match local.enhance(raw) {
        Ok(note) => Ok(Enhanced {
            note,
            source: NoteSource::Local,
            fallback_reason: Some(primary_err.to_string()),
        }),
        Err(e) if e.is_validation() => Err(e),
        Err(e) => {
            tracing::warn!("local enhancer failed, using minimal note: {}", e);
            Ok(Enhanced {
                note: Note::fallback(raw),
                source: NoteSource::Fallback,
                fallback_reason: Some(format!("{}; {}", primary_err, e)),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::{InboxError, ValidationError};
    use std::cell::Cell;

    /// Scripted enhancer for tests.
    pub struct StubEnhancer {
        pub kind: EnhancerKind,
        pub outcome: fn(&str) -> Result<Note>,
        pub calls: Cell<usize>,
    }

    impl StubEnhancer {
        pub fn new(kind: EnhancerKind, outcome: fn(&str) -> Result<Note>) -> Self {
            Self {
                kind,
                outcome,
                calls: Cell::new(0),
            }
        }

        pub fn failing(kind: EnhancerKind) -> Self {
            Self::new(kind, |_| Err(InboxError::Enhancement("boom".into())))
        }

        pub fn rejecting(kind: EnhancerKind) -> Self {
            Self::new(kind, |_| Err(ValidationError::Empty.into()))
        }

        pub fn fixed(kind: EnhancerKind) -> Self {
            Self::new(kind, |_| {
                Ok(Note::new("Stub", "# Stub\n\nbody", vec!["stub".into()]))
            })
        }
    }

    impl Enhancer for StubEnhancer {
        fn kind(&self) -> EnhancerKind {
            self.kind
        }

        fn enhance(&self, raw: &str) -> Result<Note> {
            self.calls.set(self.calls.get() + 1);
            (self.outcome)(raw)
        }
    }
}
