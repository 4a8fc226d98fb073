//! GitHub API data transfer objects
//!
//! `Event` keeps only the two fields the activity report needs. Decoding is
//! lenient in the same places the API is: missing or `null` fields become
//! empty strings, unknown fields are ignored.

use serde::Deserialize;

/// One record of a user's public activity feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "EventPayload")]
pub struct Event {
    /// Event category as sent by GitHub (e.g., "PushEvent")
    pub kind: String,

    /// Full name of the repository (e.g., "owner/repo"), empty if absent
    pub repository_name: String,
}

impl Event {
    /// Create an event from its kind and repository name
    pub fn new(kind: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            repository_name: repository_name.into(),
        }
    }
}

/// Wire shape: `{ "type": ..., "repo": { "name": ... } }`
#[derive(Deserialize)]
struct EventPayload {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    repo: Option<RepoPayload>,
}

#[derive(Deserialize)]
struct RepoPayload {
    #[serde(default)]
    name: Option<String>,
}

impl From<EventPayload> for Event {
    fn from(payload: EventPayload) -> Self {
        Self {
            kind: payload.kind.unwrap_or_default(),
            repository_name: payload.repo.and_then(|r| r.name).unwrap_or_default(),
        }
    }
}

/// Decode a response body into events, preserving their order
///
/// A `null` body is an empty feed and a `null` element is an event with
/// empty fields.
pub fn decode_events(body: &str) -> Result<Vec<Event>, serde_json::Error> {
    let events: Option<Vec<Option<Event>>> = serde_json::from_str(body)?;
    Ok(events
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
