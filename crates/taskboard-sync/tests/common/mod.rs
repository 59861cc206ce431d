/*
[INPUT]:  Test scenarios needing a remote store
[OUTPUT]: In-memory gateway with failure injection, call counts, fetch gates
[POS]:    Test infrastructure - shared across sync test modules
[UPDATE]: When the gateway trait gains operations
*/

//! Common test utilities for taskboard-sync tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskboard_adapter::{
    Board, BoardPatch, EntityId, NewBoard, NewTask, Operation, RemoteGateway, Result, StatusCode,
    Task, TaskPatch, TaskStatus, TaskboardError, User,
};
use taskboard_sync::{Actor, ChannelNotifier, Notification, NotificationLevel};
use tokio::sync::{mpsc, oneshot};

#[derive(Default)]
struct Inner {
    boards: Vec<Board>,
    tasks: Vec<Task>,
    next_id: i64,
    calls: HashMap<Operation, usize>,
    failing: HashSet<Operation>,
    gates: HashMap<EntityId, oneshot::Receiver<()>>,
    actors: Vec<EntityId>,
    created_tasks: Vec<NewTask>,
}

impl Inner {
    fn enter(&mut self, operation: Operation) -> Result<()> {
        *self.calls.entry(operation).or_default() += 1;
        if self.failing.contains(&operation) {
            return Err(TaskboardError::Status {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }

    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId::Number(self.next_id)
    }
}

/// Remote store kept in memory.
#[derive(Default)]
pub struct FakeGateway {
    inner: Mutex<Inner>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("fake gateway lock")
    }

    /// Insert a board directly into the remote store.
    pub fn add_board(&self, name: &str) -> EntityId {
        let mut inner = self.lock();
        let id = inner.next_id();
        inner.boards.push(board(id.clone(), name));
        id
    }

    /// Insert a task directly into the remote store.
    pub fn add_task(&self, board_id: &EntityId, title: &str, status: TaskStatus) -> EntityId {
        let mut inner = self.lock();
        let id = inner.next_id();
        inner.tasks.push(task(id.clone(), board_id.clone(), title, status));
        id
    }

    pub fn rename_board(&self, id: &EntityId, name: &str) {
        let mut inner = self.lock();
        if let Some(board) = inner.boards.iter_mut().find(|b| &b.id == id) {
            board.name = name.to_string();
        }
    }

    pub fn fail(&self, operation: Operation) {
        self.lock().failing.insert(operation);
    }

    pub fn recover(&self, operation: Operation) {
        self.lock().failing.remove(&operation);
    }

    pub fn calls(&self, operation: Operation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    /// Actors attached to every mutation so far, in order.
    pub fn actors(&self) -> Vec<EntityId> {
        self.lock().actors.clone()
    }

    pub fn created_tasks(&self) -> Vec<NewTask> {
        self.lock().created_tasks.clone()
    }

    pub fn remote_boards(&self) -> Vec<Board> {
        self.lock().boards.clone()
    }

    /// Hold the next task fetch for `board_id` until the sender fires.
    pub fn hold_task_fetch(&self, board_id: &EntityId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.lock().gates.insert(board_id.clone(), rx);
        tx
    }
}

#[async_trait]
impl RemoteGateway for FakeGateway {
    async fn fetch_boards(&self) -> Result<Vec<Board>> {
        let mut inner = self.lock();
        inner.enter(Operation::FetchBoards)?;
        Ok(inner.boards.clone())
    }

    async fn create_board(&self, new: &NewBoard, actor: &EntityId) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::CreateBoard)?;
        inner.actors.push(actor.clone());
        let id = inner.next_id();
        let mut created = board(id, &new.name);
        created.description = new.description.clone();
        inner.boards.push(created);
        Ok(())
    }

    async fn update_board(&self, id: &EntityId, patch: &BoardPatch) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::UpdateBoard)?;
        if let Some(board) = inner.boards.iter_mut().find(|b| &b.id == id) {
            if let Some(name) = &patch.name {
                board.name = name.clone();
            }
            if let Some(description) = &patch.description {
                board.description = description.clone();
            }
        }
        Ok(())
    }

    async fn delete_board(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::DeleteBoard)?;
        inner.actors.push(actor.clone());
        inner.boards.retain(|b| &b.id != id);
        inner.tasks.retain(|t| &t.board_id != id);
        Ok(())
    }

    async fn fetch_tasks(&self, board_id: &EntityId) -> Result<Vec<Task>> {
        let gate = {
            let mut inner = self.lock();
            inner.enter(Operation::FetchTasks)?;
            inner.gates.remove(board_id)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let inner = self.lock();
        let mut tasks: Vec<Task> = inner
            .tasks
            .iter()
            .filter(|t| &t.board_id == board_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| TaskStatus::ALL.iter().position(|s| *s == t.status));
        Ok(tasks)
    }

    async fn create_task(&self, new: &NewTask, actor: &EntityId) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::CreateTask)?;
        inner.actors.push(actor.clone());
        inner.created_tasks.push(new.clone());
        let id = inner.next_id();
        let mut created = task(id, new.board_id.clone(), &new.title, new.status);
        created.description = new.description.clone();
        inner.tasks.push(created);
        Ok(())
    }

    async fn update_task(&self, id: &EntityId, patch: &TaskPatch, actor: &EntityId) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::UpdateTask)?;
        inner.actors.push(actor.clone());
        if let Some(task) = inner.tasks.iter_mut().find(|t| &t.id == id) {
            if let Some(title) = &patch.title {
                task.title = title.clone();
            }
            if let Some(description) = &patch.description {
                task.description = description.clone();
            }
            if let Some(status) = patch.status {
                task.status = status;
            }
        }
        Ok(())
    }

    async fn update_task_status(
        &self,
        id: &EntityId,
        status: TaskStatus,
        actor: &EntityId,
    ) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::UpdateTaskStatus)?;
        inner.actors.push(actor.clone());
        if let Some(task) = inner.tasks.iter_mut().find(|t| &t.id == id) {
            task.status = status;
        }
        Ok(())
    }

    async fn delete_task(&self, id: &EntityId, actor: &EntityId) -> Result<()> {
        let mut inner = self.lock();
        inner.enter(Operation::DeleteTask)?;
        inner.actors.push(actor.clone());
        inner.tasks.retain(|t| &t.id != id);
        Ok(())
    }
}

pub fn board(id: EntityId, name: &str) -> Board {
    Board {
        id,
        name: name.to_string(),
        description: String::new(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        created_by: User::default(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        updated_by: User::default(),
        task_count: 0,
    }
}

pub fn task(id: EntityId, board_id: EntityId, title: &str, status: TaskStatus) -> Task {
    Task {
        slug: format!("task-{id}"),
        id,
        title: title.to_string(),
        description: String::new(),
        status,
        board_id,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        created_by: User::default(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        updated_by: User::default(),
    }
}

pub fn actor() -> Actor {
    Actor::new(EntityId::Number(1))
}

pub fn notifier() -> (Arc<ChannelNotifier>, mpsc::UnboundedReceiver<Notification>) {
    let (notifier, rx) = ChannelNotifier::new();
    (Arc::new(notifier), rx)
}

/// Everything notified so far, as (level, message).
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Notification>) -> Vec<(NotificationLevel, String)> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push((notification.level, notification.message));
    }
    out
}

pub fn titles(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

pub fn names(boards: &[Board]) -> Vec<String> {
    boards.iter().map(|b| b.name.clone()).collect()
}
