use ideainboxapp::handoff::download::DownloadHandoff;
use ideainboxapp::init::initialize;
use ideainboxapp::model::{Settings, ViewState};
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_capture_preview_download_discard() {
    let data = TempDir::new().unwrap();
    let downloads = TempDir::new().unwrap();

    let mut ctx = initialize(Some(data.path().to_path_buf()), true).unwrap();
    ctx.api
        .save_settings(Settings::new("Main", "Inbox"))
        .unwrap();

    let start = Instant::now();
    ctx.api.edit_draft("Garden plan:\n- tomatoes\n- basil", start);
    assert!(ctx.api.tick(start + Duration::from_secs(1)).unwrap());
    assert!(data.path().join("draft.md").exists());

    ctx.api.process_draft().unwrap();
    assert_eq!(ctx.api.view(), ViewState::Preview);
    let note = ctx.api.note().unwrap().clone();
    assert_eq!(note.title, "Garden plan");
    assert!(note.body.starts_with("# Garden plan"));

    let sink = DownloadHandoff::new(downloads.path());
    let result = ctx.api.sync(&sink).unwrap();
    assert!(!result.has_errors());
    let written = std::fs::read_to_string(downloads.path().join("Garden_plan.md")).unwrap();
    assert_eq!(written, result.payload.unwrap().export_text);

    ctx.api.discard().unwrap();
    assert!(!data.path().join("draft.md").exists());
    assert!(data.path().join("settings.json").exists());
}

#[test]
fn test_settings_survive_restart() {
    let data = TempDir::new().unwrap();
    {
        let mut ctx = initialize(Some(data.path().to_path_buf()), true).unwrap();
        ctx.api
            .save_settings(Settings::new("Work", "Projects/Ideas"))
            .unwrap();
    }
    let ctx = initialize(Some(data.path().to_path_buf()), true).unwrap();
    assert_eq!(ctx.api.settings(), &Settings::new("Work", "Projects/Ideas"));
}
