//! # Persisted session: decoding and storage helpers
//!
//! The signed-in identity is kept as a single JSON document under one storage
//! key (see [`crate::config::StorageConfig::session_key`]):
//!
//! ```json
//! { "id": "42", "username": "ash", "email": "ash@kanto.org", "token": "..." }
//! ```
//!
//! [`Session::decode`] is the only way a stored value becomes a [`Session`]:
//! it either yields a fully-typed session or an [`InvalidSession`] describing
//! why the value was rejected. [`restore`] builds on it and removes rejected
//! values from storage so a corrupt entry is only ever seen once.
//!
//! [`bearer_token`] is a lenient reader used by the HTTP client:
//! it only cares about the `token` field and ignores everything else.

use serde::{Deserialize, Deserializer, Serialize};

use crate::storage::SessionStorage;

/// The authenticated identity held by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Bearer credential issued by the backend, if any.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub token: Option<String>,
}

/// Why a persisted session value was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSession {
    #[error("persisted session is not valid JSON: {0}")]
    NotJson(String),
    #[error("persisted session has the wrong shape: {0}")]
    Shape(String),
}

/// Outcome of reading the persisted session at startup.
#[derive(Clone, Debug, PartialEq)]
pub enum Restored {
    /// Nothing was stored.
    Empty,
    Valid(Session),
    /// A value was stored but rejected; it has been removed from storage.
    Discarded(InvalidSession),
}

impl Session {
    /// True only when id, username and email are all non-empty.
    pub fn is_authenticated(&self) -> bool {
        !self.id.is_empty() && !self.username.is_empty() && !self.email.is_empty()
    }

    /// Decode a persisted session value.
    pub fn decode(raw: &str) -> Result<Self, InvalidSession> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| InvalidSession::NotJson(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| InvalidSession::Shape(e.to_string()))
    }

    pub fn encode(&self) -> String {
        // Four string fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Read the persisted session, discarding (and logging) anything malformed.
pub fn restore(storage: &impl SessionStorage, key: &str) -> Restored {
    let Some(raw) = storage.get_item(key) else {
        return Restored::Empty;
    };
    match Session::decode(&raw) {
        Ok(session) => Restored::Valid(session),
        Err(e) => {
            tracing::warn!("Discarding persisted session: {e}");
            storage.remove_item(key);
            Restored::Discarded(e)
        }
    }
}

pub fn persist(storage: &impl SessionStorage, key: &str, session: &Session) {
    storage.set_item(key, &session.encode());
}

pub fn clear(storage: &impl SessionStorage, key: &str) {
    storage.remove_item(key);
}

#[derive(Deserialize)]
struct Credential {
    #[serde(default, deserialize_with = "string_or_none")]
    token: Option<String>,
}

/// Extract a non-empty bearer token from a persisted session value.
pub fn bearer_token(raw: &str) -> Result<Option<String>, serde_json::Error> {
    let credential: Option<Credential> = serde_json::from_str(raw)?;
    Ok(credential
        .and_then(|c| c.token)
        .filter(|token| !token.is_empty()))
}
