//! Destination metadata probe

use crate::types::{map_file_error, DestEntry, EncryptDirError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the metadata of an artifact path.
///
/// A path that does not exist is reported as an absent entry. Any other
/// failure (permission denied, a file where a directory is expected, ...)
/// is returned as an error so the run stops instead of re-encrypting over
/// something it cannot see.
pub fn stat_destination(path: &Path) -> Result<DestEntry, EncryptDirError> {
    match fs::metadata(path) {
        Ok(metadata) => {
            let mtime = metadata
                .modified()
                .map_err(|e| map_file_error(path, e))?;
            Ok(DestEntry::new(path.to_path_buf(), metadata.len(), mtime))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(DestEntry::absent(path.to_path_buf())),
        Err(e) => Err(EncryptDirError::Metadata {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
