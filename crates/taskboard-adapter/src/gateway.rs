/*
[INPUT]:  Board/task operations requested by synchronizers
[OUTPUT]: Remote results in the UI vocabulary
[POS]:    Gateway seam - the only surface synchronizers depend on
[UPDATE]: When an operation is added to the remote store
*/

use async_trait::async_trait;

use crate::http::{Result, TaskboardClient};
use crate::types::{Board, BoardPatch, EntityId, NewBoard, NewTask, Task, TaskPatch, TaskStatus};

/// Remote store of boards and tasks.
///
/// Implementations translate statuses at the boundary, never retry, and
/// report every non-success outcome as an error naming the operation.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    async fn fetch_boards(&self) -> Result<Vec<Board>>;

    async fn create_board(&self, board: &NewBoard, actor: &EntityId) -> Result<()>;

    async fn update_board(&self, id: &EntityId, patch: &BoardPatch) -> Result<()>;

    async fn delete_board(&self, id: &EntityId, actor: &EntityId) -> Result<()>;

    /// Tasks of one board in `todo`, `in_progress`, `done` bucket order.
    async fn fetch_tasks(&self, board_id: &EntityId) -> Result<Vec<Task>>;

    async fn create_task(&self, task: &NewTask, actor: &EntityId) -> Result<()>;

    async fn update_task(&self, id: &EntityId, patch: &TaskPatch, actor: &EntityId) -> Result<()>;

    async fn update_task_status(
        &self,
        id: &EntityId,
        status: TaskStatus,
        actor: &EntityId,
    ) -> Result<()>;

    async fn delete_task(&self, id: &EntityId, actor: &EntityId) -> Result<()>;
}

#[async_trait]
impl RemoteGateway for TaskboardClient {
    async fn fetch_boards(&self) -> Result<Vec<Board>> {
        TaskboardClient::fetch_boards(self).await
    }

    async fn create_board(&self, board: &NewBoard, actor: &EntityId) -> Result<()> {
        TaskboardClient::create_board(self, board, actor).await
    }

    async fn update_board(&self, id: &EntityId, patch: &BoardPatch) -> Result<()> {
        TaskboardClient::update_board(self, id, patch).await
    }

    async fn delete_board(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        TaskboardClient::delete_board(self, id, actor).await
    }

    async fn fetch_tasks(&self, board_id: &EntityId) -> Result<Vec<Task>> {
        TaskboardClient::fetch_tasks(self, board_id).await
    }

    async fn create_task(&self, task: &NewTask, actor: &EntityId) -> Result<()> {
        TaskboardClient::create_task(self, task, actor).await
    }

    async fn update_task(&self, id: &EntityId, patch: &TaskPatch, actor: &EntityId) -> Result<()> {
        TaskboardClient::update_task(self, id, patch, actor).await
    }

    async fn update_task_status(
        &self,
        id: &EntityId,
        status: TaskStatus,
        actor: &EntityId,
    ) -> Result<()> {
        TaskboardClient::update_task_status(self, id, status, actor).await
    }

    async fn delete_task(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        TaskboardClient::delete_task(self, id, actor).await
    }
}
