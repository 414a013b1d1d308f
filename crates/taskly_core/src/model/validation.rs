//! Validation errors shared by the model and engine.
//!
//! # Responsibility
//! - Surface malformed upstream data explicitly instead of defaulting.
//!
//! # Invariants
//! - Every parse path for dates and wire tags reports through this type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Due date is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Priority tag is not `high|medium|low`.
    UnknownPriority(String),
    /// Recurrence tag is not `daily|weekly|monthly|yearly`.
    UnknownRecurrence(String),
    /// Sort policy tag is not `due-date|alphabetical|priority`.
    UnknownSortPolicy(String),
    /// Filter tag is not `all|active|completed`.
    UnknownFilter(String),
    /// Task title is blank after trim.
    BlankTitle,
    /// Identifier is the nil UUID.
    NilId(&'static str),
    /// Folder name is blank after trim.
    BlankFolderName,
    /// Color is not a `#rrggbb` hex string.
    InvalidColor(String),
    /// Advancing a date left the supported calendar range.
    DateOutOfRange(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
            Self::UnknownPriority(value) => {
                write!(f, "unknown priority `{value}`; expected high|medium|low")
            }
            Self::UnknownRecurrence(value) => write!(
                f,
                "unknown recurrence `{value}`; expected daily|weekly|monthly|yearly"
            ),
            Self::UnknownSortPolicy(value) => write!(
                f,
                "unknown sort policy `{value}`; expected due-date|alphabetical|priority"
            ),
            Self::UnknownFilter(value) => {
                write!(f, "unknown filter `{value}`; expected all|active|completed")
            }
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::NilId(field) => write!(f, "{field} must not be the nil uuid"),
            Self::BlankFolderName => write!(f, "folder name must not be blank"),
            Self::InvalidColor(value) => write!(f, "invalid color `{value}`; expected #rrggbb"),
            Self::DateOutOfRange(value) => {
                write!(f, "date `{value}` cannot be advanced within calendar range")
            }
        }
    }
}

impl Error for ValidationError {}
