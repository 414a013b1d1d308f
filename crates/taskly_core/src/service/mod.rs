//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine decisions and repository writes into use cases.
//! - Keep FFI/CLI callers decoupled from repository details.

pub mod task_service;
