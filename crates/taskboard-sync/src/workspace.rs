/*
[INPUT]:  UI events (select, open/cancel/submit forms, delete, move)
[OUTPUT]: Active board selection, modal state, synchronizer mutations
[POS]:    Orchestration layer - composes board and task synchronizers
[UPDATE]: When selection policy or modal routing changes
*/

use std::sync::Arc;

use taskboard_adapter::{Board, BoardPatch, EntityId, RemoteGateway, Task, TaskStatus};
use tracing::{debug, info};

use crate::actor::Actor;
use crate::boards::BoardSynchronizer;
use crate::error::{Result, SyncError};
use crate::notify::{Notifier, messages};
use crate::tasks::TaskSynchronizer;
use crate::validation::{BoardForm, TaskForm};

pub const DELETE_BOARD_PROMPT: &str = "Are you sure you want to delete this board?";
pub const DELETE_TASK_PROMPT: &str = "Are you sure you want to delete this task?";

/// Modal visibility together with the entity being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> Modal<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            Modal::Edit(item) => Some(item),
            _ => None,
        }
    }
}

/// Confirmation step in front of destructive operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn yes() -> Self {
        Self { answer: true }
    }

    pub fn no() -> Self {
        Self { answer: false }
    }
}

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.answer
    }
}

pub struct Workspace {
    boards: BoardSynchronizer,
    tasks: TaskSynchronizer,
    notifier: Arc<dyn Notifier>,
    active_board_id: Option<EntityId>,
    board_modal: Modal<Board>,
    task_modal: Modal<Task>,
}

impl Workspace {
    pub fn new(gateway: Arc<dyn RemoteGateway>, actor: Actor, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            boards: BoardSynchronizer::new(gateway.clone(), actor.clone(), notifier.clone()),
            tasks: TaskSynchronizer::new(gateway, actor, notifier.clone()),
            notifier,
            active_board_id: None,
            board_modal: Modal::Closed,
            task_modal: Modal::Closed,
        }
    }

    /// Initial board load.
    pub async fn load(&self) {
        self.boards.refresh().await;
    }

    pub fn boards(&self) -> &BoardSynchronizer {
        &self.boards
    }

    pub fn tasks(&self) -> &TaskSynchronizer {
        &self.tasks
    }

    pub fn active_board_id(&self) -> Option<&EntityId> {
        self.active_board_id.as_ref()
    }

    /// Active board as currently cached, if it is still listed.
    pub fn active_board(&self) -> Option<Board> {
        self.active_board_id
            .as_ref()
            .and_then(|id| self.boards.find(id))
    }

    pub fn board_modal(&self) -> &Modal<Board> {
        &self.board_modal
    }

    pub fn task_modal(&self) -> &Modal<Task> {
        &self.task_modal
    }

    /// Change the active board; the task collection follows it.
    pub async fn select_board(&mut self, board_id: Option<EntityId>) {
        debug!(board_id = ?board_id, "select board");
        self.active_board_id = board_id.clone();
        self.tasks.set_board(board_id).await;
    }

    pub fn open_create_board(&mut self) {
        self.board_modal = Modal::Create;
    }

    pub fn open_edit_board(&mut self, board: Board) {
        self.board_modal = Modal::Edit(board);
    }

    pub fn cancel_board_modal(&mut self) {
        self.board_modal = Modal::Closed;
    }

    /// Create or update depending on whether a board is being edited. The
    /// modal stays open when anything fails.
    pub async fn submit_board(&mut self, form: &BoardForm) -> Result<()> {
        let board = form.validate()?;

        match self.board_modal.editing().map(|b| b.id.clone()) {
            Some(id) => {
                let patch = BoardPatch {
                    name: Some(board.name),
                    description: Some(board.description),
                };
                self.boards.update(&id, patch).await?;
            }
            None => {
                let had_selection = self.active_board_id.is_some();
                self.boards.create(board).await?;
                if !had_selection {
                    let first = self.boards.snapshot().items.first().map(|b| b.id.clone());
                    if let Some(first) = first {
                        info!(board_id = %first, "selecting first board after create");
                        self.select_board(Some(first)).await;
                    }
                }
            }
        }

        self.board_modal = Modal::Closed;
        Ok(())
    }

    /// Returns `Ok(false)` when the user declines.
    pub async fn delete_board(&mut self, id: &EntityId, confirm: &dyn Confirm) -> Result<bool> {
        if !confirm.confirm(DELETE_BOARD_PROMPT) {
            return Ok(false);
        }
        self.boards.delete(id).await?;

        if self.active_board_id.as_ref() == Some(id) {
            let next = self.boards.snapshot().items.first().map(|b| b.id.clone());
            self.select_board(next).await;
        }
        Ok(true)
    }

    /// Rejected while no board is active.
    pub fn open_create_task(&mut self) -> Result<()> {
        if self.active_board_id.is_none() {
            self.notifier.warning(messages::SELECT_BOARD_FIRST);
            return Err(SyncError::NoActiveBoard);
        }
        self.task_modal = Modal::Create;
        Ok(())
    }

    pub fn open_edit_task(&mut self, task: Task) {
        self.task_modal = Modal::Edit(task);
    }

    pub fn cancel_task_modal(&mut self) {
        self.task_modal = Modal::Closed;
    }

    pub async fn submit_task(&mut self, form: &TaskForm) -> Result<()> {
        let draft = form.validate()?;

        match self.task_modal.editing().map(|t| t.id.clone()) {
            Some(id) => self.tasks.update(&id, draft.into_patch()).await?,
            None => self.tasks.create(draft).await?,
        }

        self.task_modal = Modal::Closed;
        Ok(())
    }

    /// Status drag between columns.
    pub async fn move_task(&self, id: &EntityId, status: TaskStatus) -> Result<()> {
        self.tasks.update_status(id, status).await
    }

    /// Returns `Ok(false)` when the user declines.
    pub async fn delete_task(&self, id: &EntityId, confirm: &dyn Confirm) -> Result<bool> {
        if !confirm.confirm(DELETE_TASK_PROMPT) {
            return Ok(false);
        }
        self.tasks.delete(id).await?;
        Ok(true)
    }
}
