//! # encryptdir - Encrypted Directory Mirror
//!
//! Keeps a directory of `.gpg` files in step with a plaintext directory.
//! Only new or modified files are re-encrypted, and every artifact is
//! written to a temp file first and renamed into place, so the mirror never
//! holds a half-written file.

// Module declarations
pub mod commands;
pub mod config;
pub mod crypto;
pub mod diff;
pub mod executor;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use commands::sync::{Orchestrator, SyncEvent, SyncStats};
pub use config::Config;
pub use crypto::{Encryptor, GpgEncryptor, GpgOptions};
pub use types::{EncryptDirError, EncryptFailure, RecipientSet, SyncDecision};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
