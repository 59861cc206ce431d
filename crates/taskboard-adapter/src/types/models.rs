/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed board/task/user records with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::{RemoteTaskStatus, TaskStatus};

/// Opaque record identifier.
///
/// The store hands out integers or strings depending on the resource. The
/// wire form is kept as-is so that ids echo back exactly as they were
/// received; no ordering is defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Whether this id renders to `key`, regardless of wire form.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            EntityId::Number(n) => key.trim().parse::<i64>().is_ok_and(|k| k == *n),
            EntityId::Text(s) => s == key.trim(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::convert::Infallible;

    /// Numeric input becomes `Number`, anything else `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => EntityId::Number(n),
            Err(_) => EntityId::Text(s.to_string()),
        })
    }
}

/// Actor attached to a record. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub created_by: User,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub updated_by: User,
    #[serde(default, deserialize_with = "serde_helpers::count_from_str_or_int")]
    pub task_count: u64,
}

/// Task record as the remote store sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTask {
    pub id: EntityId,
    #[serde(default)]
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub description: String,
    pub status: RemoteTaskStatus,
    pub board_id: EntityId,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub created_by: User,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub updated_by: User,
}

/// Task record in the UI vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub board_id: EntityId,
    pub created_at: String,
    pub created_by: User,
    pub updated_at: String,
    pub updated_by: User,
}

impl From<RemoteTask> for Task {
    fn from(task: RemoteTask) -> Self {
        Self {
            id: task.id,
            slug: task.slug,
            title: task.title,
            description: task.description,
            status: task.status.to_ui(),
            board_id: task.board_id,
            created_at: task.created_at,
            created_by: task.created_by,
            updated_at: task.updated_at,
            updated_by: task.updated_by,
        }
    }
}

/// Fields for a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    pub name: String,
    pub description: String,
}

/// Partial board update; `None` fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Fields for a new task, in the UI vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub board_id: EntityId,
    pub assignee_id: Option<EntityId>,
}

/// Partial task update, in the UI vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<EntityId>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer, de::Error as _};

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Text(String),
    }

    pub fn count_from_str_or_int<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Count>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Count::Int(n)) => Ok(n),
            Some(Count::Text(s)) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| D::Error::custom(format!("invalid task_count {s:?}: {e}"))),
        }
    }
}
