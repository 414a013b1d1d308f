//! Core task organization engine for Taskly.
//! Pure grouping, ordering, recurrence and reorder logic over plain data.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{Snapshot, SnapshotError};
pub use engine::board::{build_board, Board, ViewOptions};
pub use engine::classifier::{classify, classify_raw, GroupKey, GroupStyle, ACTIVE_GROUP_ORDER};
pub use engine::grouping::{group_tasks, TaskFilter, TaskGroup};
pub use engine::recurrence::{next_due_date, spawn_successor, successor_on_completion};
pub use engine::reminder::{collect_reminders, ReminderSummary};
pub use engine::reorder::{
    apply_move, array_move, resolve_drag_end, resolve_raw_drag_end, DropTarget, Move,
    SortOrderUpdate,
};
pub use engine::sorter::{sort_tasks, SortPolicy};
pub use engine::view::{
    folder_summary, progress, select_tasks, FolderCount, FolderSummary, Progress, ViewSelection,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::folder::{effective_folder, Folder, FOLDER_COLORS};
pub use model::tag::Tag;
pub use model::task::{
    priority_rank, CompletionChange, DueDate, FolderId, Priority, Recurrence, TagId, Task, TaskId,
    UserId,
};
pub use model::validation::ValidationError;
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::task_service::{CompletionOutcome, ServiceResult, TaskService, TaskServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
