//! SyncDecision - what the differ decided for one source file

/// Why an artifact has to be (re-)encrypted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// No artifact exists yet
    Missing,

    /// Source modified at or after the artifact
    Outdated,

    /// Artifact is zero bytes (truncated or failed earlier run)
    Empty,
}

/// Decision produced by the differ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDecision {
    /// Artifact is newer than the source and non-empty
    UpToDate,

    /// Artifact must be written
    NeedsEncryption(StaleReason),
}

impl SyncDecision {
    pub fn needs_encryption(&self) -> bool {
        matches!(self, SyncDecision::NeedsEncryption(_))
    }

    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            SyncDecision::UpToDate => "up to date",
            SyncDecision::NeedsEncryption(StaleReason::Missing) => "missing",
            SyncDecision::NeedsEncryption(StaleReason::Outdated) => "outdated",
            SyncDecision::NeedsEncryption(StaleReason::Empty) => "empty",
        }
    }
}
