use super::{Enhancer, EnhancerKind};
use crate::error::Result;
use crate::model::Note;
use crate::normalize::{normalize_with, NormalizerConfig};
use chrono::NaiveDate;

/// Offline enhancer backed by [`crate::normalize`].
#[derive(Debug, Clone, Default)]
pub struct LocalEnhancer {
    config: NormalizerConfig,
    /// Pinned date for the month tag; `None` means today.
    date: Option<NaiveDate>,
}

impl LocalEnhancer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config, date: None }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Enhancer for LocalEnhancer {
    fn kind(&self) -> EnhancerKind {
        EnhancerKind::Local
    }

    fn enhance(&self, raw: &str) -> Result<Note> {
        Ok(normalize_with(raw, self.today(), &self.config)?)
    }
}
