//! Due-task reminders.
//!
//! Collects incomplete tasks that are overdue or due today and renders the
//! notification summary line. Deciding whether to actually notify is left
//! to the caller.

use crate::model::task::{Task, TaskId};
use chrono::NaiveDate;
use serde::Serialize;

/// Tasks needing attention on a given day, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReminderSummary {
    pub overdue: Vec<TaskId>,
    pub due_today: Vec<TaskId>,
}

impl ReminderSummary {
    pub fn total(&self) -> usize {
        self.overdue.len() + self.due_today.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `"N task(s) need your attention"`, or `None` when nothing is due.
    pub fn headline(&self) -> Option<String> {
        match self.total() {
            0 => None,
            1 => Some("1 task needs your attention".to_string()),
            n => Some(format!("{n} tasks need your attention")),
        }
    }

    /// Notification body, e.g. `"2 overdue tasks and 1 task due today"`.
    pub fn message(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.overdue.is_empty() {
            parts.push(format!(
                "{} overdue {}",
                self.overdue.len(),
                plural_task(self.overdue.len())
            ));
        }
        if !self.due_today.is_empty() {
            parts.push(format!(
                "{} {} due today",
                self.due_today.len(),
                plural_task(self.due_today.len())
            ));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" and "))
        }
    }
}

pub fn collect_reminders(tasks: &[Task], today: NaiveDate) -> ReminderSummary {
    let pending = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due_date.map(|due| (task.id, due.date())));

    let mut summary = ReminderSummary::default();
    for (task_id, due) in pending {
        if due < today {
            summary.overdue.push(task_id);
        } else if due == today {
            summary.due_today.push(task_id);
        }
    }
    summary
}

fn plural_task(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}
