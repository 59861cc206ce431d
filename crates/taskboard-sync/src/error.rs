/*
[INPUT]:  Gateway failures, form validation failures, unmet preconditions
[OUTPUT]: SyncError returned by synchronizer and workspace operations
[POS]:    Error handling layer - sync crate
[UPDATE]: When a new failure class is surfaced to callers
*/

use taskboard_adapter::TaskboardError;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Remote call did not succeed
    #[error(transparent)]
    Remote(#[from] TaskboardError),

    /// Input rejected before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Task operation attempted with no board selected
    #[error("Please select a board first")]
    NoActiveBoard,
}

impl SyncError {
    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
