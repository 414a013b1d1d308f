//! Plain-data model consumed and produced by the organization engine.
//!
//! # Responsibility
//! - Define task, folder and tag records as immutable snapshots.
//! - Own wire-tag parsing and model validation.
//!
//! # Invariants
//! - Every record is identified by a stable, non-nil UUID.
//! - Engine functions never mutate these records in place.

pub mod folder;
pub mod tag;
pub mod task;
pub mod validation;
