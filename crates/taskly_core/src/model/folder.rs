//! Folder (list) model.
//!
//! # Responsibility
//! - Define the container a task may reference.
//! - Resolve a task's folder reference against the known folder set.
//!
//! # Invariants
//! - `name` is never blank.
//! - `color` is a `#rrggbb` hex string.
//! - A dangling folder reference is equivalent to "no folder".

use crate::model::task::{FolderId, Task, UserId};
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Palette offered when creating a folder.
pub const FOLDER_COLORS: [&str; 8] = [
    "#6366f1", "#22c55e", "#f97316", "#ef4444", "#06b6d4", "#a855f7", "#eab308", "#ec4899",
];

/// Named task container owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub owner_id: UserId,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Creates a folder with a generated id.
    ///
    /// # Errors
    /// - Returns `BlankFolderName` when `name` is blank after trim.
    /// - Returns `InvalidColor` when `color` is not `#rrggbb`.
    pub fn new(
        owner_id: UserId,
        name: impl Into<String>,
        color: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let folder = Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into().trim().to_string(),
            color: color.into(),
            created_at,
        };
        folder.validate()?;
        Ok(folder)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId("folder id"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankFolderName);
        }
        if !HEX_COLOR_RE.is_match(self.color.as_str()) {
            return Err(ValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }
}

/// Returns the task's folder when it points at a known folder.
///
/// Dangling references resolve to `None`.
pub fn effective_folder(task: &Task, folders: &[Folder]) -> Option<FolderId> {
    task.folder_id
        .filter(|folder_id| folders.iter().any(|folder| folder.id == *folder_id))
}
