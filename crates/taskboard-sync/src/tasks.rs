/*
[INPUT]:  Remote gateway, session actor, notifier, active board id
[OUTPUT]: Task collection snapshots for one board plus mutations with resync
[POS]:    Sync layer - task synchronizer
[UPDATE]: When task operations, board scoping, or stale-fetch handling change
*/

use std::sync::Arc;

use taskboard_adapter::{EntityId, RemoteGateway, Task, TaskPatch, TaskStatus};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::actor::Actor;
use crate::error::{Result, SyncError};
use crate::notify::{Notifier, messages};
use crate::state::{Store, SyncState};
use crate::validation::TaskDraft;

/// Active board together with the generation it was selected under.
#[derive(Debug, Clone, Default)]
struct Scope {
    board_id: Option<EntityId>,
    generation: u64,
}

/// Owns the local copy of the tasks of at most one board.
///
/// Each board switch bumps a generation counter. A fetch remembers the
/// generation it was issued under and its result is dropped if the
/// generation moved on before it settled.
pub struct TaskSynchronizer {
    gateway: Arc<dyn RemoteGateway>,
    actor: Actor,
    notifier: Arc<dyn Notifier>,
    scope: watch::Sender<Scope>,
    store: Store<Task>,
}

impl TaskSynchronizer {
    pub fn new(gateway: Arc<dyn RemoteGateway>, actor: Actor, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            actor,
            notifier,
            scope: watch::Sender::new(Scope::default()),
            store: Store::new(),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn board_id(&self) -> Option<EntityId> {
        self.scope.borrow().board_id.clone()
    }

    pub fn snapshot(&self) -> SyncState<Task> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState<Task>> {
        self.store.subscribe()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store.snapshot().items
    }

    pub fn find(&self, id: &EntityId) -> Option<Task> {
        self.store.find(|task| &task.id == id)
    }

    /// Current tasks grouped by status column.
    pub fn columns(&self) -> TaskColumns {
        TaskColumns::from_tasks(&self.store.snapshot().items)
    }

    /// Scope the collection to `board_id`. The previous board's tasks are
    /// discarded; `None` clears without touching the network.
    pub async fn set_board(&self, board_id: Option<EntityId>) {
        // Compare, bump and clear under the scope's write lock.
        let mut issued = None;
        self.scope.send_if_modified(|scope| {
            if scope.board_id == board_id {
                return false;
            }
            scope.generation += 1;
            scope.board_id = board_id.clone();
            issued = Some(scope.generation);
            self.store.clear();
            true
        });
        let Some(generation) = issued else {
            return;
        };

        match board_id {
            Some(board_id) => self.fetch(generation, board_id).await,
            None => debug!(generation, "task scope cleared"),
        }
    }

    /// Reload the active board's tasks. No board means an empty collection.
    pub async fn refresh(&self) {
        let Scope {
            board_id,
            generation,
        } = self.scope.borrow().clone();
        match board_id {
            Some(board_id) => self.fetch(generation, board_id).await,
            None => self.store.clear(),
        }
    }

    async fn fetch(&self, generation: u64, board_id: EntityId) {
        self.store.begin_load();
        let result = self.gateway.fetch_tasks(&board_id).await;

        // Held until the result is applied so a concurrent switch waits.
        let scope = self.scope.borrow();
        if scope.generation != generation {
            debug!(%board_id, generation, "discarding stale task fetch");
            return;
        }

        match result {
            Ok(tasks) => {
                debug!(%board_id, count = tasks.len(), "tasks refreshed");
                self.store.replace(tasks);
            }
            Err(err) => {
                warn!(%board_id, error = %err, "task refresh failed");
                self.store.fail(messages::TASKS_LOAD_FAILED);
                self.notifier.error(messages::TASKS_LOAD_FAILED);
            }
        }
    }

    /// Create a task on the active board.
    pub async fn create(&self, draft: TaskDraft) -> Result<()> {
        let board_id = self.board_id().ok_or(SyncError::NoActiveBoard)?;
        let task = draft.into_new_task(board_id);
        if let Err(err) = self.gateway.create_task(&task, self.actor.user_id()).await {
            warn!(board_id = %task.board_id, error = %err, "task create failed");
            self.notifier.error(messages::TASK_CREATE_FAILED);
            return Err(err.into());
        }
        self.refresh().await;
        self.notifier.success(messages::TASK_CREATED);
        Ok(())
    }

    pub async fn update(&self, id: &EntityId, patch: TaskPatch) -> Result<()> {
        if let Err(err) = self.gateway.update_task(id, &patch, self.actor.user_id()).await {
            warn!(task_id = %id, error = %err, "task update failed");
            self.notifier.error(messages::TASK_UPDATE_FAILED);
            return Err(err.into());
        }
        self.refresh().await;
        self.notifier.success(messages::TASK_UPDATED);
        Ok(())
    }

    /// Status-only change. Success is not notified.
    pub async fn update_status(&self, id: &EntityId, status: TaskStatus) -> Result<()> {
        if let Err(err) = self
            .gateway
            .update_task_status(id, status, self.actor.user_id())
            .await
        {
            warn!(task_id = %id, %status, error = %err, "task status update failed");
            self.notifier.error(messages::TASK_STATUS_UPDATE_FAILED);
            return Err(err.into());
        }
        self.refresh().await;
        Ok(())
    }

    pub async fn delete(&self, id: &EntityId) -> Result<()> {
        if let Err(err) = self.gateway.delete_task(id, self.actor.user_id()).await {
            warn!(task_id = %id, error = %err, "task delete failed");
            self.notifier.error(messages::TASK_DELETE_FAILED);
            return Err(err.into());
        }
        self.store.remove_where(|task| &task.id == id);
        self.notifier.success(messages::TASK_DELETED);
        Ok(())
    }
}

/// Tasks split into the three board columns, synchronized order kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskColumns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskColumns {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::Todo => columns.todo.push(task.clone()),
                TaskStatus::InProgress => columns.in_progress.push(task.clone()),
                TaskStatus::Done => columns.done.push(task.clone()),
            }
        }
        columns
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }
}
