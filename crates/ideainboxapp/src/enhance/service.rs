//! External text-enhancement service client.
//!
//! ## Exchange
//!
//! One `POST` per note:
//!
//! ```text
//! request:  {"content": "<raw note text>"}
//! response: {"title": "...", "content": "...", "tags": ["..."]}
//! ```
//!
//! `body` is accepted in place of `content`. An optional bearer token is read
//! from the environment variable named in the config.
//!
//! ## Completing Partial Answers
//!
//! The service is not trusted to honor the note contract. Every field is
//! checked and, when missing or unusable, replaced with what the local
//! normalizer would have produced:
//!
//! | field   | accepted when                       | otherwise        |
//! |---------|-------------------------------------|------------------|
//! | title   | non-blank after sanitizing          | local title      |
//! | content | non-blank (heading added if absent) | local body       |
//! | tags    | at least one valid tag after cleanup| local tags       |
//!
//! Accepted tags are capped at `max_tags`. Fewer than [`MIN_SERVICE_TAGS`]
//! are topped up from the local tags, in local order, skipping duplicates.
//!
//! Transport failures, non-2xx statuses, and responses that are not a JSON
//! object are [`InboxError::Enhancement`] errors; the caller falls back.

use super::{Enhancer, EnhancerKind, LocalEnhancer};
use crate::error::{InboxError, Result};
use crate::model::Note;
use crate::normalize::title::sanitize_title;
use crate::normalize::validate_input;
use crate::tags::sanitize_tags;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Serialize)]
struct ServiceRequest<'a> {
    content: &'a str,
}

pub const MIN_SERVICE_TAGS: usize = 3;

/// The usable parts of a service answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceResponse {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ServiceResponse {
    /// Parses a response body, tolerating missing or mistyped fields.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| InboxError::Enhancement(format!("response is not JSON: {}", e)))?;
        let Value::Object(map) = value else {
            return Err(InboxError::Enhancement(
                "response is not a JSON object".to_string(),
            ));
        };

        let text_field = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let tags = map.get("tags").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        Ok(Self {
            title: text_field("title"),
            content: text_field("content").or_else(|| text_field("body")),
            tags,
        })
    }
}

/// Fills the gaps of a service answer using the local normalizer.
pub fn complete_note(response: ServiceResponse, raw: &str, local: &LocalEnhancer) -> Note {
    let max_title_len = local.config().max_title_len;
    let title = response
        .title
        .map(|t| sanitize_title(&t, max_title_len))
        .filter(|t| !t.is_empty());
    let max_tags = local.config().max_tags;
    let tags = response
        .tags
        .map(|t| sanitize_tags(&t))
        .filter(|t| !t.is_empty());
    let short_of_tags = tags.as_ref().map_or(true, |t| t.len() < MIN_SERVICE_TAGS);

    let local_note = if title.is_none() || response.content.is_none() || short_of_tags {
        tracing::debug!("service answer incomplete, filling gaps locally");
        Some(local.enhance(raw).unwrap_or_else(|_| Note::fallback(raw)))
    } else {
        None
    };
    let from_local = |pick: fn(&Note) -> String| local_note.as_ref().map(pick).unwrap_or_default();

    let title = title.unwrap_or_else(|| from_local(|n| n.title.clone()));
    let body = match response.content {
        Some(content) if content.starts_with("# ") => content,
        Some(content) => format!("# {}\n\n{}", title, content),
        None => from_local(|n| n.body.clone()),
    };
    let local_tags = local_note
        .as_ref()
        .map(|n| n.tags.as_slice())
        .unwrap_or_default();
    let tags = match tags {
        Some(mut tags) => {
            for tag in local_tags {
                if tags.len() >= MIN_SERVICE_TAGS {
                    break;
                }
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
            tags.truncate(max_tags);
            tags
        }
        None => local_tags.to_vec(),
    };

    Note { title, body, tags }
}

pub struct ServiceEnhancer {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    local: LocalEnhancer,
}

impl ServiceEnhancer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
        local: LocalEnhancer,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InboxError::Enhancement(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
            local,
        })
    }
}

impl Enhancer for ServiceEnhancer {
    fn kind(&self) -> EnhancerKind {
        EnhancerKind::Service
    }

    fn enhance(&self, raw: &str) -> Result<Note> {
        let text = validate_input(Some(raw), self.local.config())?;

        tracing::debug!(endpoint = %self.endpoint, len = text.len(), "calling enhancement service");
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&ServiceRequest { content: text });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .map_err(|e| InboxError::Enhancement(format!("request failed: {}", e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(InboxError::Enhancement(format!(
                "service returned {}",
                status
            )));
        }
        let body = response
            .text()
            .map_err(|e| InboxError::Enhancement(format!("cannot read response: {}", e)))?;

        let parsed = ServiceResponse::parse(&body)?;
        Ok(complete_note(parsed, text, &self.local))
    }
}
