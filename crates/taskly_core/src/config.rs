//! Snapshot configuration documents.
//!
//! # Responsibility
//! - Decode the JSON snapshot handed over by collaborators (tasks, folders,
//!   tags, view options, reference day).
//!
//! # Invariants
//! - Decoding validates every task; a corrupt record rejects the snapshot.
//! - Every tag attached to a task is listed in the snapshot's tag catalog.
//! - `today` is the only time source the engine sees.

use crate::engine::board::ViewOptions;
use crate::model::folder::Folder;
use crate::model::tag::Tag;
use crate::model::task::{DueDate, TagId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input document for CLI and FFI board rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reference calendar day supplied by the caller's clock.
    pub today: DueDate,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub view: ViewOptions,
}

/// Snapshot decode failure.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    InvalidFolder(String),
    /// A task references a tag missing from the catalog.
    UnknownTag { task_id: TaskId, tag_id: TagId },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid snapshot: {err}"),
            Self::InvalidFolder(message) => write!(f, "invalid snapshot folder: {message}"),
            Self::UnknownTag { task_id, tag_id } => {
                write!(f, "task {task_id} references unknown tag {tag_id}")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidFolder(_) | Self::UnknownTag { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl Snapshot {
    /// Decodes and validates a snapshot document.
    ///
    /// # Errors
    /// - Returns `Json` for malformed JSON or invalid task records.
    /// - Returns `InvalidFolder` when a folder fails validation.
    /// - Returns `UnknownTag` when a task carries a tag outside `tags`.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        for folder in &snapshot.folders {
            folder
                .validate()
                .map_err(|err| SnapshotError::InvalidFolder(format!("{}: {err}", folder.id)))?;
        }
        for task in &snapshot.tasks {
            let unknown = task
                .tags
                .iter()
                .find(|tag| !snapshot.tags.iter().any(|known| known.id == tag.id));
            if let Some(tag) = unknown {
                return Err(SnapshotError::UnknownTag {
                    task_id: task.id,
                    tag_id: tag.id,
                });
            }
        }
        Ok(snapshot)
    }
}
