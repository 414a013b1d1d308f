//! Task organization engine.
//!
//! # Responsibility
//! - Classify, sort and group tasks relative to an injected reference day.
//! - Advance recurring tasks and resolve drag gestures into moves.
//!
//! # Invariants
//! - Every function is pure and synchronous; no clock reads, no I/O.
//! - Inputs are borrowed snapshots; outputs are new values.

pub mod board;
pub mod classifier;
pub mod grouping;
pub mod recurrence;
pub mod reminder;
pub mod reorder;
pub mod sorter;
pub mod view;
