use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use super::deadline::parse_deadline;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Path segments that are not UUIDs can never name a stored todo.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub done: bool,
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: TodoId, input: TodoInput, created_at: DateTime<Utc>) -> Self {
        Self { id, title: input.title, done: false, deadline: input.deadline, created_at }
    }
}

/// Title and deadline as supplied on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub title: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Raw request body. `deadline` is kept as given: `None` only when the field is
/// absent, `Some(Value::Null)` for an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPayload {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub deadline: Option<Value>,
}

impl From<TodoPayload> for TodoInput {
    fn from(payload: TodoPayload) -> Self {
        Self { title: payload.title, deadline: payload.deadline.as_ref().and_then(parse_deadline) }
    }
}

fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Body returned by an edit: only the editable fields plus the current flag.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditedTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
}

impl From<&Todo> for EditedTodo {
    fn from(todo: &Todo) -> Self {
        Self { title: todo.title.clone(), deadline: todo.deadline, done: todo.done }
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(at))
}

// An unparseable deadline renders as null.
fn serialize_optional_timestamp<S: Serializer>(
    at: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match at {
        Some(at) => serialize_timestamp(at, serializer),
        None => serializer.serialize_none(),
    }
}
