//! Error types for encryptdir

use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure reported by an encryption capability
#[derive(Debug, Error)]
pub enum EncryptFailure {
    /// The encryption program exited with a non-zero status
    #[error("{program} exited with status code {code}")]
    Status { program: String, code: i32 },

    /// The encryption program was killed before it could report a status
    #[error("{program} was terminated by a signal")]
    Terminated { program: String },

    /// The encryption program could not be started at all
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: IoError,
    },

    /// Reading plaintext or writing ciphertext failed
    #[error("I/O error during encryption: {0}")]
    Io(#[from] IoError),
}

impl EncryptFailure {
    /// Exit status code, if the program got far enough to report one
    pub fn status_code(&self) -> Option<i32> {
        match self {
            EncryptFailure::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Error types for encryptdir operations
#[derive(Debug, Error)]
pub enum EncryptDirError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Permission denied for specific path
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// No space left on the destination filesystem
    #[error("Disk full while writing {path}")]
    DiskFull { path: PathBuf },

    /// Metadata of a path could not be read for a reason other than absence
    #[error("Cannot read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The encryption capability failed; the whole run is aborted
    #[error("Encryption of {path} failed: {source}")]
    Encryption {
        path: PathBuf,
        #[source]
        source: EncryptFailure,
    },

    /// Encryption reported success but wrote nothing
    #[error("Encryption produced an empty artifact: {path}")]
    EmptyArtifact { path: PathBuf },
}

impl EncryptDirError {
    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, EncryptDirError::Config(_))
    }

    /// Check if this error came from the encryption capability
    pub fn is_encryption_failure(&self) -> bool {
        matches!(
            self,
            EncryptDirError::Encryption { .. } | EncryptDirError::EmptyArtifact { .. }
        )
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        matches!(self, EncryptDirError::PermissionDenied { .. })
    }
}

/// Attach a path to a raw file error, classifying the common cases.
pub fn map_file_error(path: &Path, error: IoError) -> EncryptDirError {
    if matches!(error.kind(), ErrorKind::PermissionDenied) {
        EncryptDirError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else if matches!(error.kind(), ErrorKind::StorageFull)
        || matches!(error.raw_os_error(), Some(28 | 122))
    {
        EncryptDirError::DiskFull {
            path: path.to_path_buf(),
        }
    } else {
        EncryptDirError::Io(error)
    }
}
