//! Flutter-facing bindings for the Taskly core engine.

pub mod api;
