//! # Startup
//!
//! Everything needed before the first command runs: where data lives, which
//! configuration applies, and which enhancer is primary.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data`), if given.
//! 2. `IDEAINBOX_DATA`, if set (mostly for tests).
//! 3. The OS data directory from [`directories::ProjectDirs`].
//!
//! The directory holds `ideainbox.toml`, `settings.json` and `draft.md`. It is
//! created lazily on the first write.
//!
//! ## Enhancer Selection
//!
//! `enhancer = "service"` needs `service_url`. Without one, the session falls
//! back to the local enhancer and says so in the log; it never refuses to start.

use crate::api::InboxApi;
use crate::config::InboxConfig;
use crate::enhance::{Enhancer, EnhancerKind, LocalEnhancer, ServiceEnhancer};
use crate::error::{InboxError, Result};
use crate::handoff::clipboard::ClipboardHandoff;
use crate::handoff::deeplink::DeepLinkHandoff;
use crate::handoff::download::DownloadHandoff;
use crate::handoff::{Handoff, HandoffMethod};
use crate::store::fs_backend::FsBackend;
use crate::store::InboxStore;
use directories::{ProjectDirs, UserDirs};
use std::path::{Path, PathBuf};

pub const DATA_ENV: &str = "IDEAINBOX_DATA";

pub type FsInboxApi = InboxApi<FsBackend, Box<dyn Enhancer>>;

pub struct InboxContext {
    pub api: FsInboxApi,
    pub config: InboxConfig,
    pub data_dir: PathBuf,
}

impl InboxContext {
    /// The hand-off sink for `method`, configured from this context.
    pub fn handoff(&self, method: HandoffMethod, dir: Option<PathBuf>) -> Box<dyn Handoff> {
        match method {
            HandoffMethod::Clipboard => Box::new(ClipboardHandoff),
            HandoffMethod::Download => Box::new(DownloadHandoff::new(
                dir.unwrap_or_else(|| download_dir(&self.config)),
            )),
            HandoffMethod::Link => Box::new(DeepLinkHandoff::new(self.config.deep_link())),
        }
    }
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "ideainbox", "ideainbox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InboxError::Config("Could not determine data directory".to_string()))
}

/// Configured download dir, else the user's download folder, else the cwd.
pub fn download_dir(config: &InboxConfig) -> PathBuf {
    if let Some(dir) = &config.download_dir {
        return dir.clone();
    }
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Builds the primary enhancer. `force_local` overrides the configuration.
pub fn build_enhancer(config: &InboxConfig, force_local: bool) -> Result<Box<dyn Enhancer>> {
    let local = LocalEnhancer::new(config.normalizer_config());
    if force_local || config.enhancer == EnhancerKind::Local {
        return Ok(Box::new(local));
    }
    match &config.service_url {
        Some(url) if !url.trim().is_empty() => {
            let service = ServiceEnhancer::new(
                url.trim(),
                config.service_key(),
                config.service_timeout(),
                local,
            )?;
            Ok(Box::new(service))
        }
        _ => {
            tracing::warn!("enhancer = \"service\" but no service_url is set, using local");
            Ok(Box::new(local))
        }
    }
}

pub fn initialize(data_override: Option<PathBuf>, force_local: bool) -> Result<InboxContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = InboxConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), enhancer = %config.enhancer, "initializing");

    let enhancer = build_enhancer(&config, force_local)?;
    let local = LocalEnhancer::new(config.normalizer_config());
    let store = InboxStore::new(FsBackend::new(data_dir.clone()));
    let api = InboxApi::new(store, enhancer, local, config.draft_debounce());

    Ok(InboxContext {
        api,
        config,
        data_dir,
    })
}
