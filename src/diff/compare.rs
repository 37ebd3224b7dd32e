//! Freshness comparison

use crate::types::{DestEntry, SourceEntry, StaleReason, SyncDecision};

/// Decide whether a source file's artifact has to be (re-)encrypted
///
/// Metadata only, no I/O:
///
/// 1. **Missing artifact** → encrypt
/// 2. **Source mtime >= artifact mtime** → encrypt. Equal timestamps count as
///    stale so that same-second edits are never skipped.
/// 3. **Zero-byte artifact** → encrypt, whatever the timestamps say
/// 4. Otherwise the artifact is up to date
pub fn classify(src: &SourceEntry, dest: &DestEntry) -> SyncDecision {
    let dest_mtime = match dest.mtime {
        Some(mtime) => mtime,
        None => return SyncDecision::NeedsEncryption(StaleReason::Missing),
    };

    if src.mtime >= dest_mtime {
        return SyncDecision::NeedsEncryption(StaleReason::Outdated);
    }

    if dest.size == 0 {
        return SyncDecision::NeedsEncryption(StaleReason::Empty);
    }

    SyncDecision::UpToDate
}
