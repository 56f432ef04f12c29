use ideainboxapp::model::Settings;
use ideainboxapp::store::backend::{StorageBackend, StoreKey};
use ideainboxapp::store::fs_backend::FsBackend;
use ideainboxapp::store::InboxStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing key reads as absent
    assert_eq!(backend.read(StoreKey::Draft).unwrap(), None);

    // 2. Write + read
    backend.write(StoreKey::Draft, "Hello World").unwrap();
    assert_eq!(
        backend.read(StoreKey::Draft).unwrap(),
        Some("Hello World".to_string())
    );

    // 3. Remove, twice
    backend.remove(StoreKey::Draft).unwrap();
    backend.remove(StoreKey::Draft).unwrap();
    assert_eq!(backend.read(StoreKey::Draft).unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write(StoreKey::Settings, "{}").unwrap();
    backend.write(StoreKey::Settings, "{\"subPath\":\"x\"}").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert_eq!(on_disk, "{\"subPath\":\"x\"}");

    assert_eq!(leftover_tmp_files(&dir), Vec::<String>::new());
}

fn leftover_tmp_files(dir: &TempDir) -> Vec<String> {
    fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect()
}

#[test]
fn test_failed_rename_removes_tmp_file() {
    let (dir, backend) = setup();
    // a non-empty directory in the draft's place makes the rename fail
    let blocker = dir.path().join("draft.md");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    assert!(backend.write(StoreKey::Draft, "lost words").is_err());
    assert!(leftover_tmp_files(&dir).is_empty());
    assert!(blocker.join("keep").exists());
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    backend.write(StoreKey::Draft, "draft").unwrap();
    assert!(root.join("draft.md").exists());
}

#[test]
fn test_keys_are_independent_on_disk() {
    let (dir, backend) = setup();
    let store = InboxStore::new(backend);

    store.save_settings(&Settings::new("Work", "Ideas")).unwrap();
    store.save_draft("something").unwrap();
    store.clear_draft().unwrap();

    assert!(dir.path().join("settings.json").exists());
    assert!(!dir.path().join("draft.md").exists());
    assert_eq!(store.load_settings(), Settings::new("Work", "Ideas"));
}

#[test]
fn test_hand_edited_legacy_settings_load() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("settings.json"),
        r#"{ "vaultName": "Personal", "folderPath": "/Inbox/" }"#,
    )
    .unwrap();

    let store = InboxStore::new(backend);
    let settings = store.load_settings();
    assert_eq!(settings.collection_name, "Personal");
    assert_eq!(settings.sub_path, "/Inbox/");
}

#[test]
fn test_corrupt_settings_file_falls_back() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("settings.json"), "{ not json").unwrap();
    let store = InboxStore::new(backend);
    assert_eq!(store.load_settings(), Settings::default());
}
