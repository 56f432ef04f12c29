use super::{require_collection, Handoff, HandoffMethod, HandoffReceipt};
use crate::error::{InboxError, Result};
use crate::model::Settings;
use crate::payload::{DeepLink, Payload};

/// Opens the payload's deep link with the system URI handler.
///
/// The opener is a plain function so tests can observe the URI without
/// launching anything.
pub struct DeepLinkHandoff {
    link: DeepLink,
    opener: fn(&str) -> std::io::Result<()>,
}

fn system_open(uri: &str) -> std::io::Result<()> {
    open::that(uri)
}

impl DeepLinkHandoff {
    pub fn new(link: DeepLink) -> Self {
        Self {
            link,
            opener: system_open,
        }
    }

    pub fn with_opener(mut self, opener: fn(&str) -> std::io::Result<()>) -> Self {
        self.opener = opener;
        self
    }
}

impl Handoff for DeepLinkHandoff {
    fn method(&self) -> HandoffMethod {
        HandoffMethod::Link
    }

    fn deliver(&self, payload: &Payload, settings: &Settings) -> Result<HandoffReceipt> {
        require_collection(HandoffMethod::Link, settings)?;
        let uri = self.link.uri(payload, settings);
        tracing::debug!(len = uri.len(), "opening deep link");
        (self.opener)(&uri).map_err(|e| {
            InboxError::handoff(HandoffMethod::Link, format!("cannot open link: {}", e))
        })?;
        tracing::info!(destination = %payload.destination_ref, "note handed to notes app");
        Ok(HandoffReceipt {
            uri: Some(uri),
            ..HandoffReceipt::new(HandoffMethod::Link)
        })
    }
}
