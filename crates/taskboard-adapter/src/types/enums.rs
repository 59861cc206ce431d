/*
[INPUT]:  Task status values from UI callers and from the remote store
[OUTPUT]: Closed status enums plus the single UI <-> remote mapping
[POS]:    Data layer - status codec
[UPDATE]: When a status value is added or renamed on either side
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task status as the UI speaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// Task status as the remote store speaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteTaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Column order on a board.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn to_remote(self) -> RemoteTaskStatus {
        match self {
            TaskStatus::Todo => RemoteTaskStatus::Pending,
            TaskStatus::InProgress => RemoteTaskStatus::InProgress,
            TaskStatus::Done => RemoteTaskStatus::Completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Human-readable status name.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Heading of the board column holding this status.
    pub fn column_title(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "DOING",
            TaskStatus::Done => "DONE",
        }
    }
}

impl RemoteTaskStatus {
    /// Bucket order of the task listing response.
    pub const ALL: [RemoteTaskStatus; 3] = [
        RemoteTaskStatus::Pending,
        RemoteTaskStatus::InProgress,
        RemoteTaskStatus::Completed,
    ];

    pub fn to_ui(self) -> TaskStatus {
        match self {
            RemoteTaskStatus::Pending => TaskStatus::Todo,
            RemoteTaskStatus::InProgress => TaskStatus::InProgress,
            RemoteTaskStatus::Completed => TaskStatus::Done,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RemoteTaskStatus::Pending => "pending",
            RemoteTaskStatus::InProgress => "in_progress",
            RemoteTaskStatus::Completed => "completed",
        }
    }
}

impl From<RemoteTaskStatus> for TaskStatus {
    fn from(status: RemoteTaskStatus) -> Self {
        status.to_ui()
    }
}

impl From<TaskStatus> for RemoteTaskStatus {
    fn from(status: TaskStatus) -> Self {
        status.to_remote()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RemoteTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" | "doing" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!("unknown task status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TaskStatus::Todo, RemoteTaskStatus::Pending)]
    #[case(TaskStatus::InProgress, RemoteTaskStatus::InProgress)]
    #[case(TaskStatus::Done, RemoteTaskStatus::Completed)]
    fn test_status_mapping_is_a_bijection(#[case] ui: TaskStatus, #[case] remote: RemoteTaskStatus) {
        assert_eq!(ui.to_remote(), remote);
        assert_eq!(remote.to_ui(), ui);
        assert_eq!(ui.to_remote().to_ui(), ui);
        assert_eq!(remote.to_ui().to_remote(), remote);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&TaskStatus::Todo).unwrap(), "\"todo\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"done\"");
        assert_eq!(
            serde_json::to_string(&RemoteTaskStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::from_str::<RemoteTaskStatus>("\"in_progress\"").unwrap(),
            RemoteTaskStatus::InProgress
        );
    }

    #[test]
    fn test_vocabularies_do_not_cross() {
        assert!(serde_json::from_str::<RemoteTaskStatus>("\"todo\"").is_err());
        assert!(serde_json::from_str::<RemoteTaskStatus>("\"done\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"pending\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"completed\"").is_err());
    }

    #[test]
    fn test_parse_status_from_cli_input() {
        assert_eq!("DOING".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!(" todo ".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert!("pending".parse::<TaskStatus>().is_err());
    }

    #[rstest]
    #[case(TaskStatus::Todo, "To Do", "TODO")]
    #[case(TaskStatus::InProgress, "In Progress", "DOING")]
    #[case(TaskStatus::Done, "Done", "DONE")]
    fn test_display_texts(#[case] status: TaskStatus, #[case] label: &str, #[case] column: &str) {
        assert_eq!(status.label(), label);
        assert_eq!(status.column_title(), column);
    }
}
