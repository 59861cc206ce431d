/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response envelopes and the bucketed task listing
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{RemoteTask, Task};

/// `{ "data": ... }` wrapper used by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Task listing partitioned by remote status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBuckets {
    #[serde(default)]
    pub pending: Vec<RemoteTask>,
    #[serde(default)]
    pub in_progress: Vec<RemoteTask>,
    #[serde(default)]
    pub completed: Vec<RemoteTask>,
}

impl TaskBuckets {
    /// Flatten into `pending`, `in_progress`, `completed` order, keeping the
    /// order inside each bucket, and translate statuses to the UI vocabulary.
    pub fn flatten(self) -> Vec<Task> {
        let Self {
            pending,
            in_progress,
            completed,
        } = self;
        pending
            .into_iter()
            .chain(in_progress)
            .chain(completed)
            .map(Task::from)
            .collect()
    }
}
