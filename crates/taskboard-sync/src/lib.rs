/*
[INPUT]:  Public API exports for taskboard-sync crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod actor;
pub mod boards;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;
pub mod tasks;
pub mod validation;
pub mod workspace;

// Re-export main types for convenience
pub use actor::Actor;
pub use boards::BoardSynchronizer;
pub use config::TaskboardConfig;
pub use error::SyncError;
pub use notify::{ChannelNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use state::SyncState;
pub use tasks::{TaskColumns, TaskSynchronizer};
pub use validation::{BoardForm, TaskDraft, TaskForm, ValidationErrors};
pub use workspace::{AutoConfirm, Confirm, Modal, Workspace};
