//! Task sorter.
//!
//! # Responsibility
//! - Order tasks under one of several interchangeable policies.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep input order.
//! - Inputs are never mutated; a new sequence is returned.
//! - Under `due-date`, every manually indexed task precedes every
//!   unindexed task.

use crate::model::task::{priority_rank, Task};
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Comparison policy applied within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Manual index first, then due date ascending, undated last.
    #[default]
    DueDate,
    /// Title, case-insensitive.
    Alphabetical,
    /// Priority rank, then title.
    Priority,
}

impl SortPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "due-date",
            Self::Alphabetical => "alphabetical",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for SortPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "due-date" => Ok(Self::DueDate),
            "alphabetical" => Ok(Self::Alphabetical),
            "priority" => Ok(Self::Priority),
            other => Err(ValidationError::UnknownSortPolicy(other.to_string())),
        }
    }
}

impl Display for SortPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a new, stably sorted copy of `tasks`.
pub fn sort_tasks(tasks: &[Task], policy: SortPolicy) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    // `sort_by` is a stable merge sort.
    sorted.sort_by(|a, b| compare(a, b, policy));
    sorted
}

/// Compares two tasks under `policy`. `Equal` defers to input order.
pub fn compare(a: &Task, b: &Task, policy: SortPolicy) -> Ordering {
    match policy {
        SortPolicy::DueDate => compare_due_date(a, b),
        SortPolicy::Alphabetical => collate(a.title.as_str(), b.title.as_str()),
        SortPolicy::Priority => priority_rank(a.priority)
            .cmp(&priority_rank(b.priority))
            .then_with(|| collate(a.title.as_str(), b.title.as_str())),
    }
}

fn compare_due_date(a: &Task, b: &Task) -> Ordering {
    match (a.sort_order, b.sort_order) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (a.due_date, b.due_date) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Case-insensitive title collation.
///
/// Titles differing only in letter case compare equal, so stability keeps
/// their input order.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
