use super::{Handoff, HandoffMethod, HandoffReceipt};
use crate::error::{InboxError, Result};
use crate::model::Settings;
use crate::payload::{Payload, EXPORT_EXTENSION};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Upper bound on `-N` suffixes tried before giving up.
const MAX_SUFFIX: usize = 999;

/// Writes the export text to `<dir>/<file_base_name>.md`.
///
/// Existing files are never overwritten: `note.md` is followed by `note-1.md`,
/// `note-2.md` and so on.
#[derive(Debug, Clone)]
pub struct DownloadHandoff {
    dir: PathBuf,
}

impl DownloadHandoff {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn candidate(&self, base: &str, n: usize) -> PathBuf {
        if n == 0 {
            self.dir.join(format!("{}.{}", base, EXPORT_EXTENSION))
        } else {
            self.dir.join(format!("{}-{}.{}", base, n, EXPORT_EXTENSION))
        }
    }

    /// Creates the first free file name and writes `text` into it.
    fn write_new(&self, base: &str, text: &str) -> Result<PathBuf> {
        for n in 0..=MAX_SUFFIX {
            let path = self.candidate(base, n);
            // create_new makes the existence check and the create one step
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(download_error(&path, e)),
            };
            file.write_all(text.as_bytes()).map_err(|e| download_error(&path, e))?;
            return Ok(path);
        }
        Err(InboxError::handoff(
            HandoffMethod::Download,
            format!("too many files named {} in {}", base, self.dir.display()),
        ))
    }
}

fn download_error(path: &Path, e: std::io::Error) -> InboxError {
    InboxError::handoff(
        HandoffMethod::Download,
        format!("cannot write {}: {}", path.display(), e),
    )
}

impl Handoff for DownloadHandoff {
    fn method(&self) -> HandoffMethod {
        HandoffMethod::Download
    }

    fn deliver(&self, payload: &Payload, _settings: &Settings) -> Result<HandoffReceipt> {
        std::fs::create_dir_all(&self.dir).map_err(|e| download_error(&self.dir, e))?;
        let path = self.write_new(&payload.file_base_name, &payload.export_text)?;
        tracing::info!(path = %path.display(), "note downloaded");
        Ok(HandoffReceipt {
            path: Some(path),
            ..HandoffReceipt::new(HandoffMethod::Download)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::payload::build_payload;
    use tempfile::tempdir;

    fn payload() -> Payload {
        let note = Note::new(
            "My Idea!",
            "# My Idea!\n\nBody text",
            vec!["idea".to_string(), "note".to_string()],
        );
        build_payload(&note, &Settings::new("Main", "Inbox"))
    }

    #[test]
    fn test_writes_export_text_byte_for_byte() {
        let dir = tempdir().unwrap();
        let sink = DownloadHandoff::new(dir.path());
        let receipt = sink.deliver(&payload(), &Settings::default()).unwrap();

        let path = receipt.path.unwrap();
        assert_eq!(path, dir.path().join("My_Idea_.md"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# My Idea!\n\nBody text\n\n#idea #note"
        );
    }

    #[test]
    fn test_never_overwrites() {
        let dir = tempdir().unwrap();
        let sink = DownloadHandoff::new(dir.path());
        std::fs::write(dir.path().join("My_Idea_.md"), "keep me").unwrap();

        let first = sink.deliver(&payload(), &Settings::default()).unwrap();
        let second = sink.deliver(&payload(), &Settings::default()).unwrap();

        assert_eq!(first.path.unwrap(), dir.path().join("My_Idea_-1.md"));
        assert_eq!(second.path.unwrap(), dir.path().join("My_Idea_-2.md"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("My_Idea_.md")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let sink = DownloadHandoff::new(&nested);
        let receipt = sink.deliver(&payload(), &Settings::default()).unwrap();
        assert!(receipt.path.unwrap().starts_with(&nested));
    }

    #[test]
    fn test_unwritable_target_is_a_download_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let sink = DownloadHandoff::new(blocker.join("sub"));
        let err = sink.deliver(&payload(), &Settings::default()).unwrap_err();
        assert!(err.to_string().starts_with("Could not send via download"));
    }
}
