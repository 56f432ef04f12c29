use crate::commands::{CmdMessage, CmdResult};
use crate::enhance::{enhance_with_fallback, Enhancer, NoteSource};
use crate::error::Result;

/// Enhances `raw` into a note.
///
/// Validation errors are returned as errors; the user has to fix the input.
/// Any other enhancer failure degrades to local processing and is reported
/// as a warning next to the note.
pub fn run(primary: &dyn Enhancer, local: &dyn Enhancer, raw: &str) -> Result<CmdResult> {
    let enhanced = enhance_with_fallback(primary, local, raw)?;

    let mut result = CmdResult::default();
    if let Some(reason) = &enhanced.fallback_reason {
        let message = match enhanced.source {
            NoteSource::Fallback => {
                format!("Could not process the note, kept it as is ({})", reason)
            }
            _ => format!("Enhancement unavailable, used local processing ({})", reason),
        };
        result.add_message(CmdMessage::warning(message));
    }
    result.source = Some(enhanced.source);
    Ok(result.with_note(enhanced.note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::enhance::testing::StubEnhancer;
    use crate::enhance::EnhancerKind;

    #[test]
    fn test_primary_note_has_no_messages() {
        let primary = StubEnhancer::fixed(EnhancerKind::Service);
        let local = StubEnhancer::failing(EnhancerKind::Local);
        let result = run(&primary, &local, "anything").unwrap();

        assert_eq!(result.note.unwrap().title, "Stub");
        assert_eq!(result.source, Some(NoteSource::Service));
        assert!(result.messages.is_empty());
        assert_eq!(local.calls.get(), 0);
    }

    #[test]
    fn test_service_failure_warns_and_uses_local() {
        let primary = StubEnhancer::failing(EnhancerKind::Service);
        let local = StubEnhancer::fixed(EnhancerKind::Local);
        let result = run(&primary, &local, "anything").unwrap();

        assert_eq!(result.source, Some(NoteSource::Local));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("local processing"));
    }

    #[test]
    fn test_total_failure_keeps_raw_text() {
        let primary = StubEnhancer::failing(EnhancerKind::Service);
        let local = StubEnhancer::failing(EnhancerKind::Local);
        let result = run(&primary, &local, "  raw words  ").unwrap();

        let note = result.note.unwrap();
        assert_eq!(note.body, "# My Note\n\nraw words");
        assert_eq!(result.source, Some(NoteSource::Fallback));
        assert!(result.messages[0].content.starts_with("Could not process"));
    }

    #[test]
    fn test_validation_error_propagates() {
        let primary = StubEnhancer::rejecting(EnhancerKind::Local);
        let local = StubEnhancer::fixed(EnhancerKind::Local);
        let err = run(&primary, &local, "").unwrap_err();
        assert!(err.is_validation());
    }
}
