//! Encrypt-then-rename installation of a single artifact

use crate::crypto::Encryptor;
use crate::types::{map_file_error, EncryptDirError, RecipientSet};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Encrypt `source` into `dest` using the write-then-rename strategy
///
/// 1. Create the destination's parent directories
/// 2. Encrypt into `<dest>.tmp` next to the final artifact
/// 3. Flush the temp file to disk
/// 4. Atomic rename to `dest`
///
/// Nothing becomes visible under `dest` until step 4. If encryption fails the
/// temp file is left where it is for inspection and `dest` is untouched.
///
/// # Returns
/// * `Ok(u64)` - Size of the installed artifact
/// * `Err(EncryptDirError)` - Encryption or filesystem failure
pub fn encrypt_atomic<E: Encryptor + ?Sized>(
    encryptor: &E,
    source: &Path,
    dest: &Path,
    temp: &Path,
    recipients: &RecipientSet,
) -> Result<u64, EncryptDirError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| map_file_error(parent, e))?;
    }

    let plaintext = File::open(source).map_err(|e| map_file_error(source, e))?;
    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .map_err(|e| map_file_error(temp, e))?;
    let ciphertext = temp_file
        .try_clone()
        .map_err(|e| map_file_error(temp, e))?;

    encryptor
        .encrypt(plaintext, ciphertext, recipients)
        .map_err(|failure| EncryptDirError::Encryption {
            path: source.to_path_buf(),
            source: failure,
        })?;

    temp_file.sync_all().map_err(|e| map_file_error(temp, e))?;
    let written = temp_file
        .metadata()
        .map_err(|e| map_file_error(temp, e))?
        .len();

    // Drop the file handle before rename (required on Windows)
    drop(temp_file);

    if written == 0 {
        return Err(EncryptDirError::EmptyArtifact {
            path: temp.to_path_buf(),
        });
    }

    // This is atomic on POSIX systems when temp and dest share a directory
    fs::rename(temp, dest).map_err(|e| map_file_error(dest, e))?;

    Ok(written)
}
