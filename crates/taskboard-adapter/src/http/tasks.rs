/*
[INPUT]:  Task inputs in the UI vocabulary and the acting user id
[OUTPUT]: Flattened task listings (UI vocabulary) and write acknowledgements
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding task endpoints or changing request bodies
*/

use reqwest::Method;

use crate::http::{Operation, Result, TaskboardClient};
use crate::types::{
    ActorRequest, CreateTaskRequest, DataEnvelope, EntityId, NewTask, Task, TaskBuckets,
    TaskPatch, TaskStatus, UpdateTaskRequest, UpdateTaskStatusRequest,
};

impl TaskboardClient {
    /// List a board's tasks, flattened in bucket order
    ///
    /// GET /tasks/{board_id}
    pub async fn fetch_tasks(&self, board_id: &EntityId) -> Result<Vec<Task>> {
        let board_id = board_id.to_string();
        let builder = self.request(Method::GET, &["tasks", &board_id])?;
        let envelope: DataEnvelope<TaskBuckets> =
            self.send_json(Operation::FetchTasks, builder).await?;
        Ok(envelope.data.flatten())
    }

    /// POST /tasks
    pub async fn create_task(&self, task: &NewTask, actor: &EntityId) -> Result<()> {
        let body = CreateTaskRequest::new(task, actor);
        let builder = self.request(Method::POST, &["tasks"])?.json(&body);
        self.send(Operation::CreateTask, builder).await?;
        Ok(())
    }

    /// PATCH /tasks/{id}
    pub async fn update_task(
        &self,
        id: &EntityId,
        patch: &TaskPatch,
        actor: &EntityId,
    ) -> Result<()> {
        let body = UpdateTaskRequest::new(patch, actor);
        let id = id.to_string();
        let builder = self.request(Method::PATCH, &["tasks", &id])?.json(&body);
        self.send(Operation::UpdateTask, builder).await?;
        Ok(())
    }

    /// PATCH /tasks/status/{id}
    pub async fn update_task_status(
        &self,
        id: &EntityId,
        status: TaskStatus,
        actor: &EntityId,
    ) -> Result<()> {
        let body = UpdateTaskStatusRequest {
            status: status.to_remote(),
            user_id: actor.clone(),
        };
        let id = id.to_string();
        let builder = self
            .request(Method::PATCH, &["tasks", "status", &id])?
            .json(&body);
        self.send(Operation::UpdateTaskStatus, builder).await?;
        Ok(())
    }

    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        let body = ActorRequest {
            user_id: actor.clone(),
        };
        let id = id.to_string();
        let builder = self.request(Method::DELETE, &["tasks", &id])?.json(&body);
        self.send(Operation::DeleteTask, builder).await?;
        Ok(())
    }
}
