/*
[INPUT]:  Error sources (HTTP transport, status codes, response decoding, URLs)
[OUTPUT]: Operation-scoped error types for gateway callers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new gateway operations
*/

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Gateway operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchBoards,
    CreateBoard,
    UpdateBoard,
    DeleteBoard,
    FetchTasks,
    CreateTask,
    UpdateTask,
    UpdateTaskStatus,
    DeleteTask,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::FetchBoards => "fetch boards",
            Operation::CreateBoard => "create board",
            Operation::UpdateBoard => "update board",
            Operation::DeleteBoard => "delete board",
            Operation::FetchTasks => "fetch tasks",
            Operation::CreateTask => "create task",
            Operation::UpdateTask => "update task",
            Operation::UpdateTaskStatus => "update task status",
            Operation::DeleteTask => "delete task",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the taskboard adapter
#[derive(Error, Debug)]
pub enum TaskboardError {
    /// Server answered with a non-success status
    #[error("{operation} failed: HTTP {status}")]
    Status {
        operation: Operation,
        status: StatusCode,
    },

    /// Request never produced a response
    #[error("{operation} failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be decoded
    #[error("{operation} failed: invalid response: {message}")]
    InvalidResponse {
        operation: Operation,
        message: String,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskboardError {
    /// Operation that failed, when the error came from a request.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            TaskboardError::Status { operation, .. }
            | TaskboardError::Transport { operation, .. }
            | TaskboardError::InvalidResponse { operation, .. } => Some(*operation),
            TaskboardError::UrlParse(_) | TaskboardError::Config(_) => None,
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TaskboardError::Status { status, .. } => Some(*status),
            TaskboardError::Transport { source, .. } => source.status(),
            _ => None,
        }
    }

    pub(crate) fn transport(operation: Operation, source: reqwest::Error) -> Self {
        if source.is_decode() {
            return TaskboardError::InvalidResponse {
                operation,
                message: source.to_string(),
            };
        }
        TaskboardError::Transport { operation, source }
    }
}

/// Result type alias for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;
