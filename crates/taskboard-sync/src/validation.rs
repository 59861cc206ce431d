/*
[INPUT]:  Raw board/task form fields
[OUTPUT]: Trimmed drafts ready for the gateway, or per-field messages
[POS]:    Local validation - runs before any request is issued
[UPDATE]: When field bounds or messages change
*/

use std::fmt;

use taskboard_adapter::{Board, EntityId, NewBoard, NewTask, Task, TaskPatch, TaskStatus};
use thiserror::Error;

pub const BOARD_NAME_MIN: usize = 3;
pub const BOARD_NAME_MAX: usize = 50;
pub const BOARD_DESCRIPTION_MAX: usize = 200;
pub const TASK_TITLE_MIN: usize = 3;
pub const TASK_TITLE_MAX: usize = 100;
pub const TASK_DESCRIPTION_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field-level failures. Never sent to the gateway and never notified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid input: {}", join_errors(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub name: String,
    pub description: String,
}

impl BoardForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Form prefilled with the board being edited.
    pub fn from_board(board: &Board) -> Self {
        Self::new(board.name.clone(), board.description.clone())
    }

    pub fn validate(&self) -> Result<NewBoard, ValidationErrors> {
        let name = self.name.trim();
        let description = self.description.trim();
        let mut collector = Collector::default();

        let name_len = name.chars().count();
        if name.is_empty() {
            collector.push("name", "Board name is required");
        } else if name_len < BOARD_NAME_MIN {
            collector.push("name", "Board name must be at least 3 characters");
        } else if name_len > BOARD_NAME_MAX {
            collector.push("name", "Board name must be less than 50 characters");
        }

        if description.chars().count() > BOARD_DESCRIPTION_MAX {
            collector.push("description", "Description must be less than 200 characters");
        }

        collector.finish(NewBoard {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}

/// Validated task fields, not yet bound to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee_id: Option<EntityId>,
}

impl TaskDraft {
    pub fn into_new_task(self, board_id: EntityId) -> NewTask {
        NewTask {
            title: self.title,
            description: self.description,
            status: self.status,
            board_id,
            assignee_id: self.assignee_id,
        }
    }

    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title),
            description: Some(self.description),
            status: Some(self.status),
            assignee_id: self.assignee_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee_id: Option<EntityId>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            assignee_id: None,
        }
    }
}

impl TaskForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Form prefilled with the task being edited.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            assignee_id: None,
        }
    }

    pub fn validate(&self) -> Result<TaskDraft, ValidationErrors> {
        let title = self.title.trim();
        let description = self.description.trim();
        let mut collector = Collector::default();

        let title_len = title.chars().count();
        if title.is_empty() {
            collector.push("title", "Task title is required");
        } else if title_len < TASK_TITLE_MIN {
            collector.push("title", "Task title must be at least 3 characters");
        } else if title_len > TASK_TITLE_MAX {
            collector.push("title", "Task title must be less than 100 characters");
        }

        if description.chars().count() > TASK_DESCRIPTION_MAX {
            collector.push("description", "Description must be less than 500 characters");
        }

        collector.finish(TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status: self.status,
            assignee_id: self.assignee_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some("Board name is required"))]
    #[case("   ", Some("Board name is required"))]
    #[case("ab", Some("Board name must be at least 3 characters"))]
    #[case("  ab  ", Some("Board name must be at least 3 characters"))]
    #[case("abc", None)]
    #[case(&"n".repeat(50), None)]
    #[case(&"n".repeat(51), Some("Board name must be less than 50 characters"))]
    fn test_board_name_bounds(#[case] name: &str, #[case] expected: Option<&str>) {
        let result = BoardForm::new(name, "").validate();
        match expected {
            None => assert!(result.is_ok()),
            Some(message) => assert_eq!(result.unwrap_err().message("name"), Some(message)),
        }
    }

    #[rstest]
    #[case(200, true)]
    #[case(201, false)]
    fn test_board_description_bounds(#[case] len: usize, #[case] valid: bool) {
        let result = BoardForm::new("Roadmap", "d".repeat(len)).validate();
        assert_eq!(result.is_ok(), valid);
    }

    #[test]
    fn test_board_form_trims_values() {
        let board = BoardForm::new("  Platform Launch ", "\tlaunch\n").validate().unwrap();
        assert_eq!(board.name, "Platform Launch");
        assert_eq!(board.description, "launch");
    }

    #[test]
    fn test_board_length_counts_characters() {
        let name = "é".repeat(50);
        assert!(BoardForm::new(name, "").validate().is_ok());
    }

    #[test]
    fn test_board_reports_every_failing_field() {
        let err = BoardForm::new("ab", "d".repeat(201)).validate().unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(
            err.message("description"),
            Some("Description must be less than 200 characters")
        );
    }

    #[rstest]
    #[case("", false)]
    #[case("ab", false)]
    #[case("abc", true)]
    #[case(&"t".repeat(100), true)]
    #[case(&"t".repeat(101), false)]
    fn test_task_title_bounds(#[case] title: &str, #[case] valid: bool) {
        assert_eq!(TaskForm::new(title, "").validate().is_ok(), valid);
    }

    #[rstest]
    #[case(500, true)]
    #[case(501, false)]
    fn test_task_description_bounds(#[case] len: usize, #[case] valid: bool) {
        let result = TaskForm::new("Write docs", "d".repeat(len)).validate();
        assert_eq!(result.is_ok(), valid);
    }

    #[test]
    fn test_task_messages() {
        let err = TaskForm::new("", "").validate().unwrap_err();
        assert_eq!(err.message("title"), Some("Task title is required"));
        let err = TaskForm::new("x".repeat(101), "").validate().unwrap_err();
        assert_eq!(err.message("title"), Some("Task title must be less than 100 characters"));
        let err = TaskForm::new("Write docs", "d".repeat(501)).validate().unwrap_err();
        assert_eq!(err.message("description"), Some("Description must be less than 500 characters"));
    }

    #[test]
    fn test_new_task_form_defaults_to_todo() {
        let draft = TaskForm::new("Write docs", "").validate().unwrap();
        assert_eq!(draft.status, TaskStatus::Todo);
    }

    #[test]
    fn test_draft_into_patch_sets_every_form_field() {
        let draft = TaskForm::new(" Write docs ", "")
            .with_status(TaskStatus::Done)
            .validate()
            .unwrap();
        let patch = draft.into_patch();
        assert_eq!(patch.title.as_deref(), Some("Write docs"));
        assert_eq!(patch.description.as_deref(), Some(""));
        assert_eq!(patch.status, Some(TaskStatus::Done));
        assert_eq!(patch.assignee_id, None);
    }

    #[test]
    fn test_error_display_lists_fields() {
        let err = BoardForm::new("", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: name: Board name is required");
    }
}
