//! Recurrence advancer.
//!
//! # Responsibility
//! - Compute the next due date for a recurrence rule.
//! - Build the successor task record for a completed recurring task.
//!
//! # Invariants
//! - Monthly/yearly advance clamps to the last day of the target month
//!   (Jan 31 -> Feb 29/28, Feb 29 -> Feb 28 in a non-leap year).
//! - A task without a due date or rule never yields a successor.
//! - At most one successor per incomplete -> complete transition.
//! - The predecessor record is never modified.

use crate::model::task::{CompletionChange, DueDate, Recurrence, Task, TaskId};
use crate::model::validation::ValidationError;
use chrono::{DateTime, Days, Months, NaiveDate, Utc};

/// Advances `due_date` by one recurrence period.
///
/// # Errors
/// - Returns `DateOutOfRange` when the result leaves chrono's calendar range.
pub fn next_due_date(
    due_date: NaiveDate,
    recurrence: Recurrence,
) -> Result<NaiveDate, ValidationError> {
    let advanced = match recurrence {
        Recurrence::Daily => due_date.checked_add_days(Days::new(1)),
        Recurrence::Weekly => due_date.checked_add_days(Days::new(7)),
        // chrono clamps to the last valid day of the resulting month.
        Recurrence::Monthly => due_date.checked_add_months(Months::new(1)),
        Recurrence::Yearly => due_date.checked_add_months(Months::new(12)),
    };
    advanced.ok_or_else(|| ValidationError::DateOutOfRange(due_date.to_string()))
}

/// Builds the next occurrence of `task`.
///
/// Returns `Ok(None)` when the task has no recurrence or no due date.
/// The successor copies title, notes, owner, folder, priority and
/// recurrence; it starts incomplete, untagged and without a manual index.
pub fn spawn_successor(
    task: &Task,
    successor_id: TaskId,
    created_at: DateTime<Utc>,
) -> Result<Option<Task>, ValidationError> {
    let (Some(recurrence), Some(due_date)) = (task.recurrence, task.due_date) else {
        return Ok(None);
    };
    if successor_id.is_nil() {
        return Err(ValidationError::NilId("task id"));
    }

    let next = next_due_date(due_date.date(), recurrence)?;
    Ok(Some(Task {
        id: successor_id,
        owner_id: task.owner_id,
        folder_id: task.folder_id,
        title: task.title.clone(),
        notes: task.notes.clone(),
        due_date: Some(DueDate::from(next)),
        completed: false,
        priority: task.priority,
        recurrence: task.recurrence,
        sort_order: None,
        created_at,
        tags: Vec::new(),
    }))
}

/// Builds a successor only when `change` is the incomplete -> complete edge.
pub fn successor_on_completion(
    change: &CompletionChange,
    successor_id: TaskId,
    created_at: DateTime<Utc>,
) -> Result<Option<Task>, ValidationError> {
    if !change.newly_completed {
        return Ok(None);
    }
    spawn_successor(&change.task, successor_id, created_at)
}

#[cfg(test)]
mod tests {
    use super::next_due_date;
    use crate::model::task::Recurrence;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_keeps_weekday() {
        let next = next_due_date(ymd(2024, 2, 26), Recurrence::Weekly).unwrap();
        assert_eq!(next, ymd(2024, 3, 4));
    }

    #[test]
    fn monthly_clamps_in_non_leap_year() {
        let next = next_due_date(ymd(2023, 1, 31), Recurrence::Monthly).unwrap();
        assert_eq!(next, ymd(2023, 2, 28));
    }

    #[test]
    fn max_date_reports_out_of_range() {
        assert!(next_due_date(NaiveDate::MAX, Recurrence::Daily).is_err());
    }
}
