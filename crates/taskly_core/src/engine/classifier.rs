//! Temporal classifier.
//!
//! # Responsibility
//! - Map an optional due date to a display group relative to a reference day.
//! - Own the fixed display order and style hints of every group.
//!
//! # Invariants
//! - Classification is by calendar containment, never elapsed duration.
//! - Weeks are ISO weeks (Monday to Sunday).
//! - `Completed` is never produced here; only grouping assigns it.
//! - Every date maps to exactly one of the nine active keys.

use crate::model::task::DueDate;
use crate::model::validation::ValidationError;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Display bucket for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKey {
    Overdue,
    Today,
    ThisWeek,
    NextWeek,
    ThisMonth,
    NextMonth,
    ThisYear,
    Later,
    NoDate,
    Completed,
}

/// Emission order for active (incomplete) buckets.
pub const ACTIVE_GROUP_ORDER: [GroupKey; 9] = [
    GroupKey::Overdue,
    GroupKey::Today,
    GroupKey::ThisWeek,
    GroupKey::NextWeek,
    GroupKey::ThisMonth,
    GroupKey::NextMonth,
    GroupKey::ThisYear,
    GroupKey::Later,
    GroupKey::NoDate,
];

/// Presentation metadata for one group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStyle {
    pub label: &'static str,
    /// Category (text) color hint.
    pub text_color: &'static str,
    /// Emphasis (dot) color hint.
    pub dot_color: &'static str,
}

impl GroupKey {
    /// Wire tag, e.g. `this-week`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::ThisWeek => "this-week",
            Self::NextWeek => "next-week",
            Self::ThisMonth => "this-month",
            Self::NextMonth => "next-month",
            Self::ThisYear => "this-year",
            Self::Later => "later",
            Self::NoDate => "no-date",
            Self::Completed => "completed",
        }
    }

    pub fn style(self) -> GroupStyle {
        let (label, text_color, dot_color) = match self {
            Self::Overdue => ("Overdue", "text-red-600", "bg-red-500"),
            Self::Today => ("Due Today", "text-amber-600", "bg-amber-500"),
            Self::ThisWeek => ("Due This Week", "text-blue-600", "bg-blue-500"),
            Self::NextWeek => ("Due Next Week", "text-indigo-600", "bg-indigo-500"),
            Self::ThisMonth => ("Due This Month", "text-violet-600", "bg-violet-500"),
            Self::NextMonth => ("Due Next Month", "text-purple-600", "bg-purple-500"),
            Self::ThisYear => ("Due This Year", "text-gray-600", "bg-gray-400"),
            Self::Later => ("Later", "text-gray-500", "bg-gray-300"),
            Self::NoDate => ("No Due Date", "text-gray-400", "bg-gray-200"),
            Self::Completed => ("Completed", "text-gray-400", "bg-gray-200"),
        };
        GroupStyle {
            label,
            text_color,
            dot_color,
        }
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a due date relative to `today`.
///
/// First match wins: no-date, overdue, today, this-week, next-week,
/// this-month, next-month, this-year, later.
pub fn classify(due_date: Option<DueDate>, today: NaiveDate) -> GroupKey {
    let Some(due) = due_date.map(DueDate::date) else {
        return GroupKey::NoDate;
    };

    if due < today {
        return GroupKey::Overdue;
    }
    if due == today {
        return GroupKey::Today;
    }
    if due.iso_week() == today.iso_week() {
        return GroupKey::ThisWeek;
    }
    let next_week = today.checked_add_days(Days::new(7)).map(|d| d.iso_week());
    if next_week == Some(due.iso_week()) {
        return GroupKey::NextWeek;
    }

    let month = (today.year(), today.month());
    if (due.year(), due.month()) == month {
        return GroupKey::ThisMonth;
    }
    if (due.year(), due.month()) == following_month(month) {
        return GroupKey::NextMonth;
    }
    if due.year() == today.year() {
        return GroupKey::ThisYear;
    }
    GroupKey::Later
}

/// Classifies a raw `YYYY-MM-DD` due date string.
///
/// # Errors
/// - Returns `InvalidDate` when `due_date` is present but malformed.
pub fn classify_raw(due_date: Option<&str>, today: NaiveDate) -> Result<GroupKey, ValidationError> {
    let parsed = due_date.map(DueDate::parse).transpose()?;
    Ok(classify(parsed, today))
}

fn following_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
