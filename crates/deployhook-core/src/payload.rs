//! Push payload normalization.
//!
//! Source hosts disagree on payload shapes: GitLab sends `user_name`,
//! `user_email` and `checkout_sha` at the top level, while GitHub nests the
//! pusher under `pusher` and only sends `after`. Both are reduced to a
//! [`PushEvent`].

use deployhook_models::PushEvent;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::{DomainError, Result};

/// Failure while reading one field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Missing field '{path}'")]
    Missing { path: String },

    #[error("Field '{path}' has an unexpected type")]
    WrongType { path: String },
}

/// Where to read a value in a payload object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldExtractor {
    /// Top-level key.
    Flat(&'static str),
    /// Key inside a top-level object.
    Nested(&'static str, &'static str),
}

impl FieldExtractor {
    pub fn path(&self) -> String {
        match self {
            Self::Flat(key) => (*key).to_owned(),
            Self::Nested(parent, key) => format!("{parent}.{key}"),
        }
    }

    /// Reads the field as text. `null` counts as missing.
    pub fn extract(
        &self,
        payload: &Map<String, Value>,
    ) -> std::result::Result<String, ExtractError> {
        let value = match self {
            Self::Flat(key) => payload.get(*key),
            Self::Nested(parent, key) => match payload.get(*parent) {
                None | Some(Value::Null) => None,
                Some(Value::Object(inner)) => inner.get(*key),
                Some(_) => {
                    return Err(ExtractError::WrongType {
                        path: (*parent).to_owned(),
                    })
                }
            },
        };

        match value {
            None | Some(Value::Null) => Err(ExtractError::Missing { path: self.path() }),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(_) => Err(ExtractError::WrongType { path: self.path() }),
        }
    }
}

const BRANCH_REF: FieldExtractor = FieldExtractor::Flat("ref");
const COMMIT_ID: [FieldExtractor; 2] = [
    FieldExtractor::Flat("checkout_sha"),
    FieldExtractor::Flat("after"),
];
const PUSHER_NAME: (FieldExtractor, FieldExtractor) = (
    FieldExtractor::Flat("user_name"),
    FieldExtractor::Nested("pusher", "name"),
);
const PUSHER_EMAIL: (FieldExtractor, FieldExtractor) = (
    FieldExtractor::Flat("user_email"),
    FieldExtractor::Nested("pusher", "email"),
);

/// Builds a push event from a webhook payload.
///
/// Only a missing commit identifier is fatal. Pusher fields fall back to the
/// nested `pusher` object, then to an empty string.
pub fn normalize_push_payload(project: &str, payload: &Value) -> Result<PushEvent> {
    let payload = payload
        .as_object()
        .ok_or_else(|| DomainError::MalformedPayload {
            reason: "payload is not a JSON object".into(),
        })?;

    let commit_id = COMMIT_ID
        .iter()
        .find_map(|extractor| extractor.extract(payload).ok())
        .ok_or_else(|| DomainError::MalformedPayload {
            reason: "missing 'checkout_sha' and 'after'".into(),
        })?;

    Ok(PushEvent {
        project: project.to_owned(),
        branch_ref: BRANCH_REF.extract(payload).unwrap_or_default(),
        commit_id,
        pusher_name: extract_with_fallback(payload, PUSHER_NAME),
        pusher_email: extract_with_fallback(payload, PUSHER_EMAIL),
    })
}

fn extract_with_fallback(
    payload: &Map<String, Value>,
    (primary, fallback): (FieldExtractor, FieldExtractor),
) -> String {
    primary
        .extract(payload)
        .or_else(|_| fallback.extract(payload))
        .unwrap_or_else(|e| {
            warn!(field = %primary.path(), error = %e, message = "Could not extract pusher field");
            String::new()
        })
}
