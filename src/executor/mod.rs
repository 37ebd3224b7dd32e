//! Executor module for artifact installation

pub mod install;

pub use install::encrypt_atomic;
