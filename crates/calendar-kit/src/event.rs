//! The calendar event record and JSON loading.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How an event repeats. Carried as data only; nothing here expands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default)]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A calendar entry as the front-end stores it.
///
/// `date` is `YYYY-MM-DD`; `start_time` and `end_time` are `HH:mm`. The
/// strings are kept as given, so a malformed event can still be loaded and
/// will simply never overlap anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before the start to notify.
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    /// An event with only the scheduling fields set.
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::default(),
            notification_time: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventsDocument {
    List(Vec<Event>),
    Wrapped { events: Vec<Event> },
}

/// Load events from JSON: either a bare array or `{ "events": [...] }`.
pub fn load_events(json: &str) -> Result<Vec<Event>> {
    let doc: EventsDocument = serde_json::from_str(json)?;
    let events = match doc {
        EventsDocument::List(events) | EventsDocument::Wrapped { events } => events,
    };
    tracing::debug!(count = events.len(), "loaded events");
    Ok(events)
}
