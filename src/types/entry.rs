//! Source and destination entries, re-derived from the filesystem every run

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Suffix appended to a source path to name its encrypted artifact
pub const ARTIFACT_SUFFIX: &str = ".gpg";

/// Suffix appended to an artifact path while it is being written
pub const TEMP_SUFFIX: &str = ".tmp";

/// A plaintext file found under the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// File name (last path component)
    pub name: String,

    /// Full path of the file, as it can be opened
    pub path: PathBuf,

    /// Path relative to the source root
    pub relative: PathBuf,

    /// Last modification time
    pub mtime: SystemTime,

    /// File size in bytes
    pub size: u64,
}

impl SourceEntry {
    /// Create a new SourceEntry rooted at `root`
    pub fn new(root: &Path, relative: PathBuf, size: u64, mtime: SystemTime) -> Self {
        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: root.join(&relative),
            relative,
            mtime,
            size,
        }
    }

    /// Where this file's encrypted artifact lives under `dest_root`
    pub fn artifact_path(&self, dest_root: &Path) -> PathBuf {
        with_suffix(&dest_root.join(&self.relative), ARTIFACT_SUFFIX)
    }
}

/// The encrypted counterpart of a source file, possibly absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestEntry {
    /// Artifact path (`<dest root>/<relative>.gpg`)
    pub path: PathBuf,

    /// Last modification time, `None` when the artifact does not exist
    pub mtime: Option<SystemTime>,

    /// Artifact size in bytes (0 when absent)
    pub size: u64,
}

impl DestEntry {
    /// An existing artifact
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self {
            path,
            mtime: Some(mtime),
            size,
        }
    }

    /// An artifact that has not been written yet
    pub fn absent(path: PathBuf) -> Self {
        Self {
            path,
            mtime: None,
            size: 0,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.mtime.is_none()
    }

    /// Path the artifact is written to before being renamed into place
    pub fn temp_path(&self) -> PathBuf {
        with_suffix(&self.path, TEMP_SUFFIX)
    }
}

/// Append `suffix` to the final component of `path` without touching its extension.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}
