//! Task use-case service.
//!
//! # Responsibility
//! - Render boards from repository state.
//! - Apply completion toggles, then run the recurrence step explicitly.
//! - Resolve drag gestures against the current board and persist the move.
//!
//! # Invariants
//! - The predecessor of a recurring task keeps its due date and stays
//!   completed; the successor is a separate record.
//! - A failed completion leaves the stored task unchanged, so a retry still
//!   sees the incomplete -> complete edge.
//! - A `NoOp` move performs no repository write.
//! - Log lines carry metadata only (ids, counts), never titles or notes.

use crate::engine::board::{build_board, Board, ViewOptions};
use crate::engine::recurrence::successor_on_completion;
use crate::engine::reorder::{resolve_drag_end, DropTarget, Move};
use crate::model::folder::Folder;
use crate::model::task::{Task, TaskId};
use crate::model::validation::ValidationError;
use crate::repo::task_repo::{RepoError, TaskRepository};
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ServiceResult<T> = Result<T, TaskServiceError>;

/// Errors from task use-case operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Engine rejected the input.
    Validation(ValidationError),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TaskNotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::TaskNotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for TaskServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome of a completion toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// Toggled task as persisted.
    pub task: Task,
    /// Next occurrence created for a recurring task, if any.
    pub successor: Option<Task>,
}

/// Use-case service over a task repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn create_task(&self, task: &Task) -> ServiceResult<TaskId> {
        self.repo.create_task(task).map_err(Into::into)
    }

    /// Renders the board for `options` on `today`.
    pub fn board(
        &self,
        folders: &[Folder],
        options: &ViewOptions,
        today: NaiveDate,
    ) -> ServiceResult<Board> {
        let tasks = self.repo.list_tasks()?;
        let board = build_board(&tasks, folders, options, today);
        info!(
            "event=board_build module=service status=ok tasks={} groups={} filter={} sort={}",
            tasks.len(),
            board.groups.len(),
            options.filter,
            options.sort
        );
        Ok(board)
    }

    /// Sets the completion flag and, on the incomplete -> complete edge of a
    /// dated recurring task, stores one successor.
    ///
    /// # Errors
    /// - Returns `Validation` when the next due date is out of range; nothing
    ///   is written.
    /// - Returns `Repo` when the successor cannot be stored; the completion
    ///   flag is reverted.
    pub fn set_completed(
        &self,
        id: TaskId,
        completed: bool,
        now: DateTime<Utc>,
    ) -> ServiceResult<CompletionOutcome> {
        let current = self
            .repo
            .get_task(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        let change = current.set_completed(completed);
        let successor = successor_on_completion(&change, Uuid::new_v4(), now)?;

        self.repo.update_task(&change.task)?;
        if let Some(next) = &successor {
            if let Err(err) = self.repo.create_task(next) {
                warn!(
                    "event=task_complete module=service status=error task_id={} error={}",
                    id, err
                );
                self.repo.update_task(&current)?;
                return Err(err.into());
            }
        }

        info!(
            "event=task_complete module=service status=ok task_id={} completed={} successor={}",
            id,
            completed,
            successor.is_some()
        );
        Ok(CompletionOutcome {
            task: change.task,
            successor,
        })
    }

    /// Resolves a drag of `dragged` onto `target` against the current board
    /// and persists the resulting move.
    pub fn drop_task(
        &self,
        dragged: TaskId,
        target: DropTarget,
        folders: &[Folder],
        options: &ViewOptions,
        today: NaiveDate,
    ) -> ServiceResult<Move> {
        let tasks = self.repo.list_tasks()?;
        let board = build_board(&tasks, folders, options, today);
        let mv = resolve_drag_end(dragged, target, &board.groups, folders);
        self.apply_move(&mv)?;
        Ok(mv)
    }

    /// Persists a resolved move.
    pub fn apply_move(&self, mv: &Move) -> ServiceResult<()> {
        match mv {
            Move::NoOp => {
                info!("event=task_move module=service status=noop");
            }
            Move::ReassignFolder { task_id, folder_id } => {
                self.repo.set_folder(*task_id, *folder_id)?;
                info!(
                    "event=task_move module=service status=ok kind=reassign task_id={} has_folder={}",
                    task_id,
                    folder_id.is_some()
                );
            }
            Move::Reorder { group, ordered } => {
                if let Err(err) = self.repo.apply_sort_orders(&mv.sort_order_updates()) {
                    warn!(
                        "event=task_move module=service status=error kind=reorder group={} error={}",
                        group, err
                    );
                    return Err(err.into());
                }
                info!(
                    "event=task_move module=service status=ok kind=reorder group={} size={}",
                    group,
                    ordered.len()
                );
            }
        }
        Ok(())
    }
}
