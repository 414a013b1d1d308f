//! Tag model.
//!
//! Tags are opaque display metadata for the engine; only view selection
//! looks at tag identity.

use crate::model::task::{TagId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-defined label attached to tasks (many-to-many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub owner_id: UserId,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}
