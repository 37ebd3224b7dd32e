//! Main sync command

use crate::crypto::{Encryptor, GpgEncryptor};
use crate::diff::{classify, stat_destination};
use crate::executor::encrypt_atomic;
use crate::scanner::scan_source;
use crate::types::{EncryptDirError, RecipientSet, StaleReason, SyncDecision};
use crate::ui::Reporter;
use crate::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counters for one sync run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Source files visited
    pub scanned: usize,
    /// Artifacts installed (in dry-run: artifacts that would be)
    pub encrypted: usize,
    /// Source files whose artifact was already fresh
    pub up_to_date: usize,
    /// Total size of installed artifacts
    pub bytes_written: u64,
}

/// Events emitted while a run progresses.
#[derive(Debug)]
pub enum SyncEvent {
    /// A stale file is about to be encrypted. Only emitted in verbose mode.
    Encrypting { path: PathBuf, reason: StaleReason },
    /// An artifact was renamed into place.
    Installed { path: PathBuf, bytes: u64 },
    /// Every source file was handled.
    Complete { stats: SyncStats, dry_run: bool },
}

/// Optional callback used to receive sync events.
pub type SyncCallback<'a> = dyn Fn(&SyncEvent) + Send + Sync + 'a;

/// Drives one pass over a source directory
///
/// Files are visited one at a time in sorted order. Each stale file is
/// encrypted and installed before the next one is looked at, and the first
/// failure ends the run.
pub struct Orchestrator<'a> {
    encryptor: &'a dyn Encryptor,
    exclude_patterns: &'a [String],
    on_event: Option<&'a SyncCallback<'a>>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(encryptor: &'a dyn Encryptor) -> Self {
        Self {
            encryptor,
            exclude_patterns: &[],
            on_event: None,
        }
    }

    /// Skip source files matching these globs
    pub fn with_excludes(mut self, patterns: &'a [String]) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_callback(mut self, on_event: &'a SyncCallback<'a>) -> Self {
        self.on_event = Some(on_event);
        self
    }

    /// Make sure `destination` holds an up to date encrypted copy of every
    /// file in `source`.
    ///
    /// Existing artifacts that are newer than their source file and not
    /// empty are left alone. With `dry_run` nothing is written, and a
    /// missing `source` is not an error.
    pub fn sync(
        &self,
        source: &Path,
        destination: &Path,
        recipients: &RecipientSet,
        verbose: bool,
        dry_run: bool,
    ) -> Result<SyncStats, EncryptDirError> {
        let mut stats = SyncStats::default();

        if dry_run && !source.exists() {
            debug!(source = %source.display(), "source missing, nothing to do in dry-run");
            return Ok(stats);
        }

        if !source.is_dir() {
            return Err(EncryptDirError::Config(format!(
                "Source is not a directory: {:?}",
                source
            )));
        }

        for entry in scan_source(source, self.exclude_patterns)? {
            stats.scanned += 1;

            let dest = stat_destination(&entry.artifact_path(destination))?;
            let decision = classify(&entry, &dest);
            let reason = match decision {
                SyncDecision::UpToDate => {
                    debug!(file = %entry.name, path = %entry.path.display(), "up to date");
                    stats.up_to_date += 1;
                    continue;
                }
                SyncDecision::NeedsEncryption(reason) => reason,
            };

            debug!(path = %entry.path.display(), reason = decision.label(), "needs encryption");
            if verbose {
                self.emit(SyncEvent::Encrypting {
                    path: entry.path.clone(),
                    reason,
                });
            }

            if dry_run {
                stats.encrypted += 1;
                continue;
            }

            let bytes = encrypt_atomic(
                self.encryptor,
                &entry.path,
                &dest.path,
                &dest.temp_path(),
                recipients,
            )?;
            info!(artifact = %dest.path.display(), bytes, "installed");

            stats.encrypted += 1;
            stats.bytes_written += bytes;
            self.emit(SyncEvent::Installed {
                path: dest.path,
                bytes,
            });
        }

        self.emit(SyncEvent::Complete {
            stats: stats.clone(),
            dry_run,
        });

        Ok(stats)
    }

    fn emit(&self, event: SyncEvent) {
        if let Some(callback) = self.on_event {
            callback(&event);
        }
    }
}

/// Run the sync operation with gpg and console reporting
pub fn run(config: Config) -> Result<SyncStats, EncryptDirError> {
    let encryptor = GpgEncryptor::new(config.gpg.clone());
    let reporter = Reporter::new(config.verbose);

    reporter.start(&config.recipients);
    let on_event = |event: &SyncEvent| reporter.handle(event);

    Orchestrator::new(&encryptor)
        .with_excludes(&config.exclude_patterns)
        .with_callback(&on_event)
        .sync(
            &config.source,
            &config.destination,
            &config.recipients,
            config.verbose,
            config.dry_run,
        )
}
