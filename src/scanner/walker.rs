//! Sequential source walker

use crate::types::{map_file_error, EncryptDirError, SourceEntry};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Scan the source directory and list every file that needs an artifact
///
/// Walks `root_path` recursively with the `ignore` crate. Unlike a normal
/// project walk, nothing is filtered implicitly: hidden files and files
/// listed in `.gitignore` are part of the tree and get encrypted. Only the
/// caller's exclude globs remove entries.
///
/// # Ordering
/// Entries come back sorted by relative path, component by component, so
/// runs are deterministic whatever order the filesystem lists directories in.
///
/// # Errors
/// * Invalid exclude patterns return `EncryptDirError::Config`
/// * Traversal and metadata errors are fatal
/// * Broken symlinks and symlinks to directories are skipped with a warning
pub fn scan_source(
    root_path: &Path,
    exclude_patterns: &[String],
) -> Result<Vec<SourceEntry>, EncryptDirError> {
    let mut override_builder = ignore::overrides::OverrideBuilder::new(root_path);
    for pattern in exclude_patterns {
        // The ignore crate's OverrideBuilder uses ! for exclusion
        let exclude_pattern = format!("!{}", pattern);
        override_builder.add(&exclude_pattern).map_err(|e| {
            EncryptDirError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e))
        })?;
    }
    let overrides = override_builder
        .build()
        .map_err(|e| EncryptDirError::Config(format!("Failed to build exclude overrides: {}", e)))?;

    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false)
        .follow_links(false)
        .overrides(overrides)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();

    for result in walker {
        let entry = result.map_err(walk_error)?;

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue,
        };

        if file_type.is_dir() {
            continue;
        }

        if !file_type.is_file() && !file_type.is_symlink() {
            debug!(path = %entry.path().display(), "skipping special file");
            continue;
        }

        let metadata = match fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) if file_type.is_symlink() => {
                warn!(
                    "Skipping broken symlink {}: {}",
                    entry.path().display(),
                    e
                );
                continue;
            }
            Err(e) => return Err(map_file_error(entry.path(), e)),
        };

        if !metadata.is_file() {
            warn!(
                "Skipping {}: symlink does not point to a regular file",
                entry.path().display()
            );
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(root_path)
            .map_err(|_| {
                EncryptDirError::Config(format!(
                    "{} is outside the source directory",
                    entry.path().display()
                ))
            })?
            .to_path_buf();

        let mtime = metadata
            .modified()
            .map_err(|e| map_file_error(entry.path(), e))?;

        entries.push(SourceEntry::new(
            root_path,
            relative_path,
            metadata.len(),
            mtime,
        ));
    }

    entries.sort_by(|a, b| a.relative.cmp(&b.relative));
    debug!(files = entries.len(), root = %root_path.display(), "scanned source");

    Ok(entries)
}

fn walk_error(error: ignore::Error) -> EncryptDirError {
    let message = error.to_string();
    match error.into_io_error() {
        Some(io) => EncryptDirError::Io(io),
        None => EncryptDirError::Io(std::io::Error::other(message)),
    }
}
