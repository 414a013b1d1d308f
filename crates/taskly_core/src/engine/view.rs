//! View selection and sidebar/progress summaries.
//!
//! # Responsibility
//! - Narrow a snapshot to one folder and/or one tag before grouping.
//! - Count active tasks per folder for the sidebar.
//! - Summarize completion progress of the visible tasks.
//!
//! # Invariants
//! - Dangling folder references count as "no folder".
//! - Folder summaries follow folder creation order.

use crate::model::folder::{effective_folder, Folder};
use crate::model::task::{FolderId, TagId, Task};
use serde::{Deserialize, Serialize};

/// Folder/tag narrowing chosen in the sidebar and filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSelection {
    /// `None` shows every folder.
    pub folder: Option<FolderId>,
    /// `None` shows every tag.
    pub tag: Option<TagId>,
}

/// Returns the tasks visible under `selection`, in input order.
pub fn select_tasks(tasks: &[Task], folders: &[Folder], selection: ViewSelection) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match selection.folder {
            Some(folder_id) => effective_folder(task, folders) == Some(folder_id),
            None => true,
        })
        .filter(|task| match selection.tag {
            Some(tag_id) => task.has_tag(tag_id),
            None => true,
        })
        .cloned()
        .collect()
}

/// Active task count for one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCount {
    pub folder_id: FolderId,
    pub name: String,
    pub color: String,
    pub active: usize,
}

/// Sidebar counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSummary {
    /// Active tasks across all folders, including unfiled ones.
    pub all_active: usize,
    pub folders: Vec<FolderCount>,
}

pub fn folder_summary(tasks: &[Task], folders: &[Folder]) -> FolderSummary {
    let mut ordered = folders.to_vec();
    ordered.sort_by_key(|folder| folder.created_at);

    let active = tasks
        .iter()
        .filter(|task| !task.completed)
        .collect::<Vec<_>>();
    let counts = ordered
        .into_iter()
        .map(|folder| FolderCount {
            active: active
                .iter()
                .filter(|task| effective_folder(task, folders) == Some(folder.id))
                .count(),
            folder_id: folder.id,
            name: folder.name,
            color: folder.color,
        })
        .collect();

    FolderSummary {
        all_active: active.len(),
        folders: counts,
    }
}

/// Completion progress over a task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub remaining: usize,
    /// Rounded half-up; `0` for an empty set.
    pub percent: u8,
}

impl Progress {
    pub fn is_all_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

pub fn progress(tasks: &[Task]) -> Progress {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    Progress {
        completed,
        total,
        remaining: total - completed,
        percent: rounded_percent(completed, total),
    }
}

fn rounded_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (part * 200 + total) / (total * 2);
    u8::try_from(scaled.min(100)).unwrap_or(100)
}
