//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Describe the writes the engine asks of persistence: successor creation,
//!   manual-order batches and folder reassignment.
//! - Keep an ordered in-process task list for callers without a backend.
//!
//! # Invariants
//! - `list_tasks` returns tasks in creation order.
//! - Reapplying an identical sort-order batch leaves state unchanged.

use crate::engine::reorder::SortOrderUpdate;
use crate::model::task::{FolderId, Task, TaskId};
use crate::model::validation::ValidationError;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(TaskId),
    Duplicate(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Duplicate(id) => write!(f, "task already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Duplicate(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for task persistence.
pub trait TaskRepository {
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn update_task(&self, task: &Task) -> RepoResult<()>;
    /// Writes manual order indices; all ids must exist.
    fn apply_sort_orders(&self, updates: &[SortOrderUpdate]) -> RepoResult<()>;
    fn set_folder(&self, id: TaskId, folder_id: Option<FolderId>) -> RepoResult<()>;
}

/// Single-threaded, in-process task store.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RefCell<Vec<Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, validating each record.
    pub fn with_tasks(tasks: Vec<Task>) -> RepoResult<Self> {
        let repo = Self::new();
        for task in &tasks {
            repo.create_task(task)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let tasks = self.tasks.borrow();
        Ok(tasks.iter().find(|task| task.id == id).cloned())
    }

    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;
        let mut tasks = self.tasks.borrow_mut();
        if tasks.iter().any(|existing| existing.id == task.id) {
            return Err(RepoError::Duplicate(task.id));
        }
        tasks.push(task.clone());
        Ok(task.id)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        task.validate()?;
        let mut tasks = self.tasks.borrow_mut();
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id == task.id)
            .ok_or(RepoError::NotFound(task.id))?;
        *slot = task.clone();
        Ok(())
    }

    fn apply_sort_orders(&self, updates: &[SortOrderUpdate]) -> RepoResult<()> {
        let mut tasks = self.tasks.borrow_mut();
        // Check the whole batch first so a bad id leaves state untouched.
        if let Some(missing) = updates
            .iter()
            .find(|update| !tasks.iter().any(|task| task.id == update.task_id))
        {
            return Err(RepoError::NotFound(missing.task_id));
        }
        for update in updates {
            if let Some(task) = tasks.iter_mut().find(|task| task.id == update.task_id) {
                task.sort_order = Some(update.sort_order);
            }
        }
        Ok(())
    }

    fn set_folder(&self, id: TaskId, folder_id: Option<FolderId>) -> RepoResult<()> {
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(RepoError::NotFound(id))?;
        task.folder_id = folder_id;
        Ok(())
    }
}
