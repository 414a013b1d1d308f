//! Task domain model.
//!
//! # Responsibility
//! - Define the task record handed to the engine as an immutable snapshot.
//! - Parse and validate wire tags (due date, priority, recurrence).
//! - Provide the pure completion state transition.
//!
//! # Invariants
//! - `id` and `owner_id` are never nil.
//! - `title` is never blank.
//! - `due_date` is a calendar date without time component.
//! - `sort_order = None` means "unordered, fall back to date".

use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

/// Stable task identifier.
pub type TaskId = Uuid;
/// Stable folder (list) identifier.
pub type FolderId = Uuid;
/// Stable tag identifier.
pub type TagId = Uuid;
/// Owning user identifier.
pub type UserId = Uuid;

/// Calendar due date, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// - Returns `InvalidDate` for any other shape or a non-existent day.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !ISO_DATE_RE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for DueDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DueDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Task priority. Unset is modeled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Wire tag used by storage and presentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Sort rank for an optional priority: `high=0, medium=1, low=2, unset=3`.
pub fn priority_rank(priority: Option<Priority>) -> u8 {
    match priority {
        Some(Priority::High) => 0,
        Some(Priority::Medium) => 1,
        Some(Priority::Low) => 2,
        None => 3,
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ValidationError::UnknownPriority(other.to_string())),
        }
    }
}

/// Recurrence rule attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for Recurrence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(ValidationError::UnknownRecurrence(other.to_string())),
        }
    }
}

/// Task record as supplied by the persistence layer.
///
/// Deserialization runs [`Task::validate`], so corrupted rows surface as
/// errors instead of silently entering grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    /// Weak reference; a dangling id is treated as "no folder".
    pub folder_id: Option<FolderId>,
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<DueDate>,
    pub completed: bool,
    pub priority: Option<Priority>,
    pub recurrence: Option<Recurrence>,
    /// Manual order index written by drag reorder.
    pub sort_order: Option<i64>,
    pub created_at: DateTime<Utc>,
    /// Rendered in insertion order.
    pub tags: Vec<Tag>,
}

#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    owner_id: UserId,
    #[serde(default, alias = "list_id")]
    folder_id: Option<FolderId>,
    title: String,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    due_date: Option<DueDate>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    recurrence: Option<Recurrence>,
    #[serde(default)]
    sort_order: Option<i64>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let task = Self {
            id: value.id,
            owner_id: value.owner_id,
            folder_id: value.folder_id,
            title: value.title,
            notes: value.notes,
            due_date: value.due_date,
            completed: value.completed,
            priority: value.priority,
            recurrence: value.recurrence,
            sort_order: value.sort_order,
            created_at: value.created_at,
            tags: value.tags,
        };
        task.validate()?;
        Ok(task)
    }
}

/// Result of a completion toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChange {
    /// Task with the new completion flag applied.
    pub task: Task,
    /// `true` only on the incomplete -> complete edge.
    pub newly_completed: bool,
}

impl Task {
    /// Creates an incomplete task with a generated id and current timestamp.
    ///
    /// # Errors
    /// - Returns `BlankTitle` when `title` is blank after trim.
    /// - Returns `NilId` when `owner_id` is nil.
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), owner_id, title, Utc::now())
    }

    /// Creates an incomplete task with caller-provided identity and timestamp.
    ///
    /// Used by import paths and by recurrence spawning.
    pub fn with_id(
        id: TaskId,
        owner_id: UserId,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        let task = Self {
            id,
            owner_id,
            folder_id: None,
            title,
            notes: None,
            due_date: None,
            completed: false,
            priority: None,
            recurrence: None,
            sort_order: None,
            created_at,
            tags: Vec::new(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks model invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId("task id"));
        }
        if self.owner_id.is_nil() {
            return Err(ValidationError::NilId("owner id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        Ok(())
    }

    pub fn with_folder(mut self, folder_id: Option<FolderId>) -> Self {
        self.folder_id = folder_id;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DueDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_recurrence(mut self, recurrence: Option<Recurrence>) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_sort_order(mut self, sort_order: Option<i64>) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns a copy with the completion flag set.
    ///
    /// This is the state transition only; spawning a recurrence successor is
    /// a separate, explicit step (see `engine::recurrence`).
    pub fn set_completed(&self, completed: bool) -> CompletionChange {
        let newly_completed = !self.completed && completed;
        let mut task = self.clone();
        task.completed = completed;
        CompletionChange {
            task,
            newly_completed,
        }
    }

    /// Returns whether the task carries the given tag.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|tag| tag.id == tag_id)
    }
}
