use super::styles;
use ideainboxapp::commands::{CmdMessage, CmdResult, MessageLevel};
use ideainboxapp::config::InboxConfig;
use ideainboxapp::enhance::NoteSource;
use ideainboxapp::model::{Note, Settings};
use ideainboxapp::tags::format_tags;
use std::path::Path;

/// Note preview: title, body, tag line, and where it came from.
pub fn render_note(note: &Note, source: Option<NoteSource>) -> String {
    let mut out = String::new();
    out.push_str(&styles::TITLE.apply_to(&note.title).to_string());
    if let Some(source) = source {
        let label = match source {
            NoteSource::Service => "enhanced",
            NoteSource::Local => "local",
            NoteSource::Fallback => "unprocessed",
        };
        let label = styles::MUTED.apply_to(format!("({})", label));
        out.push_str(&format!(" {}", label));
    }
    out.push_str("\n\n");
    out.push_str(&note.body);
    out.push_str("\n\n");
    out.push_str(&styles::TAGS.apply_to(format_tags(&note.tags)).to_string());
    out.push('\n');
    out
}

pub fn render_message(message: &CmdMessage) -> String {
    let styled = match message.level {
        MessageLevel::Info => styles::MUTED.apply_to(&message.content),
        MessageLevel::Success => styles::SUCCESS.apply_to(&message.content),
        MessageLevel::Warning => styles::WARNING.apply_to(&message.content),
        MessageLevel::Error => styles::ERROR.apply_to(&message.content),
    };
    format!("{}\n", styled)
}

pub fn render_settings(settings: &Settings) -> String {
    let path = if settings.sub_path.trim().is_empty() {
        "(root)"
    } else {
        settings.sub_path.as_str()
    };
    format!(
        "{} {}\n{} {}\n",
        styles::KEY.apply_to("collection:"),
        settings.collection_name,
        styles::KEY.apply_to("path:      "),
        path
    )
}

/// Effective configuration as `key = value` lines.
pub fn render_config(config: &InboxConfig, data_dir: &Path) -> String {
    let mut out = format!(
        "{} = {}\n",
        styles::KEY.apply_to("data_dir"),
        data_dir.display()
    );
    if let Ok(serde_json::Value::Object(map)) = serde_json::to_value(config) {
        for (key, value) in map {
            let value = match value {
                serde_json::Value::Null => styles::MUTED.apply_to("(unset)").to_string(),
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            out.push_str(&format!("{} = {}\n", styles::KEY.apply_to(key), value));
        }
    }
    out
}

/// Full human rendering of a command result, split into (stdout, stderr).
pub fn render_result(result: &CmdResult) -> (String, String) {
    let mut out = String::new();
    let mut err = String::new();

    if let Some(note) = &result.note {
        out.push_str(&render_note(note, result.source));
    }
    if let Some(settings) = &result.settings {
        out.push_str(&render_settings(settings));
    }
    if let Some(draft) = &result.draft {
        out.push_str(draft);
        if !draft.ends_with('\n') {
            out.push('\n');
        }
    }

    for message in &result.messages {
        if message.is_problem() {
            err.push_str(&render_message(message));
            continue;
        }
        if !out.is_empty() && message.level == MessageLevel::Success {
            out.push('\n');
        }
        out.push_str(&render_message(message));
    }
    (out, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn note() -> Note {
        Note::new(
            "Buy milk",
            "# Buy milk\n\nBuy milk\n\nCall mom",
            vec!["milk".into(), "note".into()],
        )
    }

    #[test]
    fn test_render_note() {
        let out = plain(&render_note(&note(), Some(NoteSource::Local)));
        assert_eq!(
            out,
            "Buy milk (local)\n\n# Buy milk\n\nBuy milk\n\nCall mom\n\n#milk #note\n"
        );
    }

    #[test]
    fn test_render_settings_root_path() {
        let out = plain(&render_settings(&Settings::default()));
        assert!(out.contains("collection: Main"));
        assert!(out.contains("(root)"));
    }

    #[test]
    fn test_render_result_routes_problems_to_stderr() {
        let mut result = CmdResult::default().with_note(note());
        result.add_message(CmdMessage::warning("used local processing"));
        result.add_message(CmdMessage::error("Could not send via link: nope"));
        result.add_message(CmdMessage::info("Try another way"));

        let (out, err) = render_result(&result);
        let (out, err) = (plain(&out), plain(&err));
        assert!(out.starts_with("Buy milk"));
        assert!(out.ends_with("Try another way\n"));
        assert_eq!(
            err,
            "used local processing\nCould not send via link: nope\n"
        );
    }

    #[test]
    fn test_render_config_lists_keys() {
        let out = plain(&render_config(&InboxConfig::default(), Path::new("/data")));
        assert!(out.starts_with("data_dir = /data\n"));
        assert!(out.contains("enhancer = local\n"));
        assert!(out.contains("service_url = (unset)\n"));
        assert!(out.contains("max_tags = 8\n"));
    }
}
