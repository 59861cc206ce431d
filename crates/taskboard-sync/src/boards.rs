/*
[INPUT]:  Remote gateway, session actor, notifier
[OUTPUT]: Board collection snapshots plus create/update/delete with resync
[POS]:    Sync layer - board synchronizer
[UPDATE]: When board operations or their resync discipline change
*/

use std::sync::Arc;

use taskboard_adapter::{Board, BoardPatch, EntityId, NewBoard, RemoteGateway};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::actor::Actor;
use crate::error::Result;
use crate::notify::{Notifier, messages};
use crate::state::{Store, SyncState};

/// Owns the local copy of the board collection.
///
/// Every successful create/update is followed by a full refresh; delete
/// drops the entry locally instead.
pub struct BoardSynchronizer {
    gateway: Arc<dyn RemoteGateway>,
    actor: Actor,
    notifier: Arc<dyn Notifier>,
    store: Store<Board>,
}

impl BoardSynchronizer {
    pub fn new(gateway: Arc<dyn RemoteGateway>, actor: Actor, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            actor,
            notifier,
            store: Store::new(),
        }
    }

    /// Construct and perform the initial load for `actor`.
    pub async fn connect(
        gateway: Arc<dyn RemoteGateway>,
        actor: Actor,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let synchronizer = Self::new(gateway, actor, notifier);
        synchronizer.refresh().await;
        synchronizer
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Reload when the owning identity changes.
    pub async fn switch_actor(&mut self, actor: Actor) {
        if self.actor == actor {
            return;
        }
        self.actor = actor;
        self.refresh().await;
    }

    pub fn snapshot(&self) -> SyncState<Board> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncState<Board>> {
        self.store.subscribe()
    }

    pub fn boards(&self) -> Vec<Board> {
        self.store.snapshot().items
    }

    pub fn find(&self, id: &EntityId) -> Option<Board> {
        self.store.find(|board| &board.id == id)
    }

    /// Replace the collection with the remote list. Failures are recorded
    /// and notified; the previous boards stay in place.
    pub async fn refresh(&self) {
        self.store.begin_load();
        match self.gateway.fetch_boards().await {
            Ok(boards) => {
                debug!(count = boards.len(), "boards refreshed");
                self.store.replace(boards);
            }
            Err(err) => {
                warn!(error = %err, "board refresh failed");
                self.store.fail(messages::BOARDS_LOAD_FAILED);
                self.notifier.error(messages::BOARDS_LOAD_FAILED);
            }
        }
    }

    pub async fn create(&self, board: NewBoard) -> Result<()> {
        if let Err(err) = self.gateway.create_board(&board, self.actor.user_id()).await {
            warn!(error = %err, "board create failed");
            self.notifier.error(messages::BOARD_CREATE_FAILED);
            return Err(err.into());
        }
        self.refresh().await;
        self.notifier.success(messages::BOARD_CREATED);
        Ok(())
    }

    pub async fn update(&self, id: &EntityId, patch: BoardPatch) -> Result<()> {
        if let Err(err) = self.gateway.update_board(id, &patch).await {
            warn!(board_id = %id, error = %err, "board update failed");
            self.notifier.error(messages::BOARD_UPDATE_FAILED);
            return Err(err.into());
        }
        self.refresh().await;
        self.notifier.success(messages::BOARD_UPDATED);
        Ok(())
    }

    pub async fn delete(&self, id: &EntityId) -> Result<()> {
        if let Err(err) = self.gateway.delete_board(id, self.actor.user_id()).await {
            warn!(board_id = %id, error = %err, "board delete failed");
            self.notifier.error(messages::BOARD_DELETE_FAILED);
            return Err(err.into());
        }
        self.store.remove_where(|board| &board.id == id);
        self.notifier.success(messages::BOARD_DELETED);
        Ok(())
    }
}
