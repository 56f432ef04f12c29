//! # Configuration
//!
//! Tool configuration is a [`confique`] struct, loaded in priority order from:
//!
//! 1. **Environment variables**: `IDEAINBOX_ENHANCER`, `IDEAINBOX_SERVICE_URL`, ...
//! 2. **Config file**: `ideainbox.toml` in the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Configuration is separate from the user [`Settings`](crate::model::Settings)
//! (collection and sub path): settings are edited by the user through the app
//! and persisted in `settings.json`; configuration is read-only at runtime.
//!
//! ## Available Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `enhancer` | `local` | `local` or `service` |
//! | `service_url` | none | Enhancement service endpoint |
//! | `service_key_env` | `IDEAINBOX_SERVICE_KEY` | Env var holding the bearer key |
//! | `service_timeout_secs` | `15` | HTTP timeout |
//! | `max_length` | `5000` | Input cap in characters, `0` disables |
//! | `min_word_len` | `4` | Shortest word that can become a tag |
//! | `top_words` | `5` | Frequent words considered for tags |
//! | `max_tags` | `8` | Cap on the tag list |
//! | `quick_threshold` | `100` | Below this, tag `quick-note` |
//! | `detailed_threshold` | `300` | Above this, tag `detailed` |
//! | `draft_debounce_ms` | `500` | Draft save delay after the last edit |
//! | `link_scheme` | `notes` | Deep link URI scheme |
//! | `link_action` | `new` | Deep link URI action |
//! | `download_dir` | user download dir | Where `send --via download` writes |

use crate::enhance::EnhancerKind;
use crate::error::{InboxError, Result};
use crate::normalize::NormalizerConfig;
use crate::payload::DeepLink;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "ideainbox.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InboxConfig {
    /// Which enhancer runs first: "local" or "service".
    #[config(env = "IDEAINBOX_ENHANCER", default = "local")]
    pub enhancer: EnhancerKind,

    /// Endpoint of the enhancement service. Required when enhancer = "service".
    #[config(env = "IDEAINBOX_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Name of the environment variable holding the service's bearer key.
    #[config(env = "IDEAINBOX_SERVICE_KEY_ENV", default = "IDEAINBOX_SERVICE_KEY")]
    pub service_key_env: String,

    #[config(env = "IDEAINBOX_SERVICE_TIMEOUT_SECS", default = 15)]
    pub service_timeout_secs: u64,

    /// Longest accepted note, in characters. 0 disables the limit.
    #[config(env = "IDEAINBOX_MAX_LENGTH", default = 5000)]
    pub max_length: usize,

    #[config(env = "IDEAINBOX_MIN_WORD_LEN", default = 4)]
    pub min_word_len: usize,

    #[config(env = "IDEAINBOX_TOP_WORDS", default = 5)]
    pub top_words: usize,

    #[config(env = "IDEAINBOX_MAX_TAGS", default = 8)]
    pub max_tags: usize,

    #[config(env = "IDEAINBOX_QUICK_THRESHOLD", default = 100)]
    pub quick_threshold: usize,

    #[config(env = "IDEAINBOX_DETAILED_THRESHOLD", default = 300)]
    pub detailed_threshold: usize,

    #[config(env = "IDEAINBOX_DRAFT_DEBOUNCE_MS", default = 500)]
    pub draft_debounce_ms: u64,

    #[config(env = "IDEAINBOX_LINK_SCHEME", default = "notes")]
    pub link_scheme: String,

    #[config(env = "IDEAINBOX_LINK_ACTION", default = "new")]
    pub link_action: String,

    /// Target directory for downloads. Defaults to the user's download folder.
    #[config(env = "IDEAINBOX_DOWNLOAD_DIR")]
    pub download_dir: Option<PathBuf>,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            enhancer: EnhancerKind::Local,
            service_url: None,
            service_key_env: "IDEAINBOX_SERVICE_KEY".to_string(),
            service_timeout_secs: 15,
            max_length: 5000,
            min_word_len: 4,
            top_words: 5,
            max_tags: 8,
            quick_threshold: 100,
            detailed_threshold: 300,
            draft_debounce_ms: 500,
            link_scheme: "notes".to_string(),
            link_action: "new".to_string(),
            download_dir: None,
        }
    }
}

impl InboxConfig {
    /// Loads env vars, then `<data_dir>/ideainbox.toml`, then defaults.
    /// A missing file is fine; a malformed one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| InboxError::Config(e.to_string()))
    }

    /// A commented TOML template listing every key and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            max_length: (self.max_length > 0).then_some(self.max_length),
            min_word_len: self.min_word_len,
            top_words: self.top_words,
            max_tags: self.max_tags,
            quick_threshold: self.quick_threshold,
            detailed_threshold: self.detailed_threshold,
            ..NormalizerConfig::default()
        }
    }

    pub fn draft_debounce(&self) -> Duration {
        Duration::from_millis(self.draft_debounce_ms)
    }

    pub fn service_timeout(&self) -> Duration {
        Duration::from_secs(self.service_timeout_secs)
    }

    /// The service key, read from the env var named by `service_key_env`.
    pub fn service_key(&self) -> Option<String> {
        std::env::var(&self.service_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn deep_link(&self) -> DeepLink {
        DeepLink::new(self.link_scheme.clone(), self.link_action.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_normalizer_defaults() {
        let config = InboxConfig::default();
        assert_eq!(config.enhancer, EnhancerKind::Local);
        assert_eq!(config.normalizer_config(), NormalizerConfig::default());
        assert_eq!(config.draft_debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_max_length_disables_cap() {
        let config = InboxConfig {
            max_length: 0,
            ..Default::default()
        };
        assert_eq!(config.normalizer_config().max_length, None);
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "max_tags = 6\nlink_scheme = \"myapp\"\ndraft_debounce_ms = 250\n",
        )
        .unwrap();

        let config = InboxConfig::load(dir.path()).unwrap();
        assert_eq!(config.max_tags, 6);
        assert_eq!(config.deep_link().scheme, "myapp");
        assert_eq!(config.draft_debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "max_tags = \"lots\"\n").unwrap();
        let err = InboxConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, InboxError::Config(_)));
    }

    #[test]
    fn test_template_lists_keys() {
        let template = InboxConfig::template();
        assert!(template.contains("enhancer"));
        assert!(template.contains("link_scheme"));
    }
}
