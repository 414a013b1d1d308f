//! Repository seam towards the persistence collaborator.
//!
//! # Responsibility
//! - Define the data access contract the service layer depends on.
//! - Provide an in-process implementation for CLI, FFI and tests.
//!
//! # Invariants
//! - Writes validate records before accepting them.
//! - Missing records are reported as `NotFound`, never silently ignored.

pub mod task_repo;
