//! Board assembly.
//!
//! # Responsibility
//! - Run view selection, grouping, progress and reminders as one pure call.
//!
//! # Invariants
//! - Progress covers the selected tasks; folder counts and reminders cover
//!   the whole snapshot.

use crate::engine::grouping::{group_tasks, TaskFilter, TaskGroup};
use crate::engine::reminder::{collect_reminders, ReminderSummary};
use crate::engine::sorter::SortPolicy;
use crate::engine::view::{
    folder_summary, progress, select_tasks, FolderSummary, Progress, ViewSelection,
};
use crate::model::folder::Folder;
use crate::model::task::{FolderId, TagId, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User-selected view configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub filter: TaskFilter,
    pub sort: SortPolicy,
    pub folder: Option<FolderId>,
    pub tag: Option<TagId>,
}

impl ViewOptions {
    pub fn selection(&self) -> ViewSelection {
        ViewSelection {
            folder: self.folder,
            tag: self.tag,
        }
    }
}

/// Everything the presentation layer renders for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub groups: Vec<TaskGroup>,
    pub progress: Progress,
    pub folders: FolderSummary,
    pub reminders: ReminderSummary,
}

pub fn build_board(
    tasks: &[Task],
    folders: &[Folder],
    options: &ViewOptions,
    today: NaiveDate,
) -> Board {
    let visible = select_tasks(tasks, folders, options.selection());
    Board {
        groups: group_tasks(&visible, options.filter, options.sort, today),
        progress: progress(&visible),
        folders: folder_summary(tasks, folders),
        reminders: collect_reminders(tasks, today),
    }
}
