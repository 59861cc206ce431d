/*
[INPUT]:  Caller inputs in the UI vocabulary plus the acting user id
[OUTPUT]: Request bodies in the remote vocabulary, ready for serialization
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::RemoteTaskStatus;
use super::models::{BoardPatch, EntityId, NewBoard, NewTask, TaskPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
    pub description: String,
    pub user_id: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBoardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body carrying only the acting user, used by deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRequest {
    pub user_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub status: RemoteTaskStatus,
    pub board_id: EntityId,
    pub user_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RemoteTaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<EntityId>,
    pub user_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: RemoteTaskStatus,
    pub user_id: EntityId,
}

impl CreateBoardRequest {
    pub fn new(board: &NewBoard, actor: &EntityId) -> Self {
        Self {
            name: board.name.clone(),
            description: board.description.clone(),
            user_id: actor.clone(),
        }
    }
}

impl From<&BoardPatch> for UpdateBoardRequest {
    fn from(patch: &BoardPatch) -> Self {
        Self {
            name: patch.name.clone(),
            description: patch.description.clone(),
        }
    }
}

impl CreateTaskRequest {
    pub fn new(task: &NewTask, actor: &EntityId) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.to_remote(),
            board_id: task.board_id.clone(),
            user_id: actor.clone(),
            assignee_id: task.assignee_id.clone(),
        }
    }
}

impl UpdateTaskRequest {
    pub fn new(patch: &TaskPatch, actor: &EntityId) -> Self {
        Self {
            title: patch.title.clone(),
            description: patch.description.clone(),
            status: patch.status.map(|status| status.to_remote()),
            assignee_id: patch.assignee_id.clone(),
            user_id: actor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;

    #[test]
    fn test_create_task_request_uses_remote_vocabulary() {
        let task = NewTask {
            title: "Ship it".to_string(),
            description: String::new(),
            status: TaskStatus::Todo,
            board_id: EntityId::Number(4),
            assignee_id: None,
        };
        let body = serde_json::to_value(CreateTaskRequest::new(&task, &EntityId::Number(1))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Ship it",
                "description": "",
                "status": "pending",
                "board_id": 4,
                "user_id": 1
            })
        );
    }

    #[test]
    fn test_update_task_request_omits_absent_fields() {
        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            ..TaskPatch::default()
        };
        let body = serde_json::to_value(UpdateTaskRequest::new(&patch, &EntityId::Number(1))).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "completed", "user_id": 1 }));
    }

    #[test]
    fn test_update_board_request_is_partial() {
        let patch = BoardPatch {
            name: Some("Renamed".to_string()),
            description: None,
        };
        let body = serde_json::to_value(UpdateBoardRequest::from(&patch)).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Renamed" }));
    }
}
