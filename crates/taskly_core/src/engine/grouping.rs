//! Grouping pipeline.
//!
//! # Responsibility
//! - Partition a snapshot into active/completed tasks.
//! - Bucket active tasks by due-date class and sort each bucket.
//! - Emit buckets in fixed display order, skipping empty ones.
//!
//! # Invariants
//! - No emitted group is ever empty.
//! - Active buckets follow `ACTIVE_GROUP_ORDER`; `completed` is always last.
//! - Output depends only on the arguments (same input, same output).

use crate::engine::classifier::{classify, GroupKey, ACTIVE_GROUP_ORDER};
use crate::engine::sorter::{sort_tasks, SortPolicy};
use crate::model::task::{Task, TaskId};
use crate::model::validation::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Completion filter selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    /// Active buckets plus a trailing `completed` bucket.
    #[default]
    All,
    /// Active buckets only.
    Active,
    /// A single `completed` bucket.
    Completed,
}

impl TaskFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnknownFilter(other.to_string())),
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered bucket: key plus ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup {
    pub key: GroupKey,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn position(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }
}

/// Groups `tasks` for display.
pub fn group_tasks(
    tasks: &[Task],
    filter: TaskFilter,
    policy: SortPolicy,
    today: NaiveDate,
) -> Vec<TaskGroup> {
    let (active, completed) = partition_by_completion(tasks);

    let active_groups = match filter {
        TaskFilter::Completed => Vec::new(),
        TaskFilter::All | TaskFilter::Active => bucket_active(&active, policy, today),
    };
    let completed_group = match filter {
        TaskFilter::Active => None,
        TaskFilter::All | TaskFilter::Completed => completed_bucket(&completed, policy),
    };

    active_groups.into_iter().chain(completed_group).collect()
}

/// Splits into `(active, completed)`, preserving input order on each side.
pub fn partition_by_completion(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|task| !task.completed)
}

/// Classifies active tasks and emits sorted, non-empty buckets in order.
pub fn bucket_active(active: &[Task], policy: SortPolicy, today: NaiveDate) -> Vec<TaskGroup> {
    let classified = active
        .iter()
        .map(|task| (classify(task.due_date, today), task))
        .collect::<Vec<_>>();

    ACTIVE_GROUP_ORDER
        .iter()
        .filter_map(|key| {
            let members = classified
                .iter()
                .filter(|(class, _)| class == key)
                .map(|(_, task)| (*task).clone())
                .collect::<Vec<_>>();
            non_empty_group(*key, &members, policy)
        })
        .collect()
}

fn completed_bucket(completed: &[Task], policy: SortPolicy) -> Option<TaskGroup> {
    non_empty_group(GroupKey::Completed, completed, policy)
}

fn non_empty_group(key: GroupKey, members: &[Task], policy: SortPolicy) -> Option<TaskGroup> {
    if members.is_empty() {
        return None;
    }
    Some(TaskGroup {
        key,
        tasks: sort_tasks(members, policy),
    })
}
