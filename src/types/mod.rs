//! Core type definitions for encryptdir

mod action;
mod entry;
mod error;
mod recipients;

pub use action::{StaleReason, SyncDecision};
pub use entry::{with_suffix, DestEntry, SourceEntry, ARTIFACT_SUFFIX, TEMP_SUFFIX};
pub use error::{map_file_error, EncryptDirError, EncryptFailure};
pub use recipients::{normalize_recipients, RecipientSet};
