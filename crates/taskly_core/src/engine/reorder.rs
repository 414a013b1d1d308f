//! Reorder resolver.
//!
//! # Responsibility
//! - Translate a finished drag gesture into a data-level [`Move`].
//! - Apply a [`Move`] to a task snapshot, producing a new snapshot.
//!
//! # Invariants
//! - Only same-group task-to-task drops reorder; cross-group drops are `NoOp`.
//! - Reorder uses array-move semantics (remove, then insert), never swap.
//! - After a reorder, manual indices of the group are `0..n`, contiguous.
//! - An unresolvable target is `NoOp`, not an error. Folder targets must be
//!   in the known folder set.
//! - The virtual `today` container never accepts reassignment.

use crate::engine::classifier::GroupKey;
use crate::engine::grouping::TaskGroup;
use crate::model::folder::Folder;
use crate::model::task::{FolderId, Task, TaskId};
use serde::Serialize;
use uuid::Uuid;

const ALL_TASKS_TARGET: &str = "all";
const TODAY_TARGET: &str = "today";
const FOLDER_TARGET_PREFIX: &str = "folder:";

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Another rendered task.
    Task(TaskId),
    /// A folder container in the sidebar.
    Folder(FolderId),
    /// The "all tasks" container; reassigns to no folder.
    AllTasks,
    /// Read-only "today" pseudo-bucket.
    Today,
}

impl DropTarget {
    /// Parses a raw drop identifier from the presentation layer.
    ///
    /// Accepted shapes: `all`, `today`, `folder:<uuid>`, `<uuid>` (task).
    /// Returns `None` for anything else.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed {
            ALL_TASKS_TARGET => Some(Self::AllTasks),
            TODAY_TARGET => Some(Self::Today),
            _ => match trimmed.strip_prefix(FOLDER_TARGET_PREFIX) {
                Some(folder) => Uuid::parse_str(folder).ok().map(Self::Folder),
                None => Uuid::parse_str(trimmed).ok().map(Self::Task),
            },
        }
    }

    /// Raw identifier understood by [`DropTarget::from_raw`].
    pub fn to_raw(self) -> String {
        match self {
            Self::Task(task_id) => task_id.to_string(),
            Self::Folder(folder_id) => format!("{FOLDER_TARGET_PREFIX}{folder_id}"),
            Self::AllTasks => ALL_TASKS_TARGET.to_string(),
            Self::Today => TODAY_TARGET.to_string(),
        }
    }
}

/// Decision produced from a drag-end gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    ReassignFolder {
        task_id: TaskId,
        folder_id: Option<FolderId>,
    },
    Reorder {
        group: GroupKey,
        ordered: Vec<TaskId>,
    },
    NoOp,
}

/// One manual-index write for the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOrderUpdate {
    pub task_id: TaskId,
    pub sort_order: i64,
}

impl Move {
    /// Positional index batch for a `Reorder`; empty otherwise.
    pub fn sort_order_updates(&self) -> Vec<SortOrderUpdate> {
        match self {
            Self::Reorder { ordered, .. } => ordered
                .iter()
                .zip(0_i64..)
                .map(|(task_id, sort_order)| SortOrderUpdate {
                    task_id: *task_id,
                    sort_order,
                })
                .collect(),
            Self::ReassignFolder { .. } | Self::NoOp => Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }
}

/// Resolves a drag of `dragged` onto `target` against the rendered groups.
///
/// `folders` is the known folder set; a drop onto any other folder id is
/// unresolvable.
pub fn resolve_drag_end(
    dragged: TaskId,
    target: DropTarget,
    groups: &[TaskGroup],
    folders: &[Folder],
) -> Move {
    let Some((source_group, source_index)) = locate(dragged, groups) else {
        return Move::NoOp;
    };

    match target {
        DropTarget::Today => Move::NoOp,
        DropTarget::AllTasks => reassign(&source_group.tasks[source_index], None),
        DropTarget::Folder(folder_id) => {
            if !folders.iter().any(|folder| folder.id == folder_id) {
                return Move::NoOp;
            }
            reassign(&source_group.tasks[source_index], Some(folder_id))
        }
        DropTarget::Task(target_id) => {
            if target_id == dragged {
                return Move::NoOp;
            }
            match source_group.position(target_id) {
                Some(target_index) => Move::Reorder {
                    group: source_group.key,
                    ordered: array_move(&source_group.task_ids(), source_index, target_index),
                },
                None => Move::NoOp,
            }
        }
    }
}

/// Resolves raw identifiers; anything unparseable is `NoOp`.
pub fn resolve_raw_drag_end(
    dragged: &str,
    target: &str,
    groups: &[TaskGroup],
    folders: &[Folder],
) -> Move {
    let Ok(dragged) = Uuid::parse_str(dragged.trim()) else {
        return Move::NoOp;
    };
    match DropTarget::from_raw(target) {
        Some(target) => resolve_drag_end(dragged, target, groups, folders),
        None => Move::NoOp,
    }
}

/// Moves the element at `from` to index `to`, shifting the rest.
///
/// Out-of-range indices return the input unchanged.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    if from >= items.len() || to >= items.len() {
        return items.to_vec();
    }
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Returns a new snapshot with `mv` applied.
///
/// A `Reorder` rewrites `sort_order` of every task it names; other tasks are
/// returned unchanged.
pub fn apply_move(tasks: &[Task], mv: &Move) -> Vec<Task> {
    match mv {
        Move::NoOp => tasks.to_vec(),
        Move::ReassignFolder { task_id, folder_id } => tasks
            .iter()
            .map(|task| {
                if task.id == *task_id {
                    task.clone().with_folder(*folder_id)
                } else {
                    task.clone()
                }
            })
            .collect(),
        Move::Reorder { .. } => {
            let updates = mv.sort_order_updates();
            tasks
                .iter()
                .map(|task| match updates.iter().find(|update| update.task_id == task.id) {
                    Some(update) => task.clone().with_sort_order(Some(update.sort_order)),
                    None => task.clone(),
                })
                .collect()
        }
    }
}

fn locate(task_id: TaskId, groups: &[TaskGroup]) -> Option<(&TaskGroup, usize)> {
    groups
        .iter()
        .find_map(|group| group.position(task_id).map(|index| (group, index)))
}

fn reassign(task: &Task, folder_id: Option<FolderId>) -> Move {
    if task.folder_id == folder_id {
        return Move::NoOp;
    }
    Move::ReassignFolder {
        task_id: task.id,
        folder_id,
    }
}
