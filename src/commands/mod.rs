//! Top-level commands

pub mod sync;

pub use sync::{run, Orchestrator, SyncCallback, SyncEvent, SyncStats};
