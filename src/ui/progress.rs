//! Progress reporting

use crate::commands::sync::{SyncEvent, SyncStats};
use crate::types::RecipientSet;
use console::style;
use indicatif::HumanBytes;
use std::path::Path;

/// Prints verbose-mode notices for a sync run
///
/// Silent unless verbose, so cron jobs only produce output on failure.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Announce who the artifacts are encrypted to.
    pub fn start(&self, recipients: &RecipientSet) {
        if self.verbose {
            println!("{}", format_recipients(recipients));
        }
    }

    pub fn handle(&self, event: &SyncEvent) {
        if !self.verbose {
            return;
        }
        match event {
            SyncEvent::Encrypting { path, .. } => println!("{}", format_encrypting(path)),
            SyncEvent::Installed { .. } => {}
            SyncEvent::Complete { stats, dry_run } => {
                let summary = format_summary(stats, *dry_run);
                if *dry_run {
                    println!("{}", style(summary).yellow());
                } else {
                    println!("{}", style(summary).dim());
                }
            }
        }
    }
}

fn format_recipients(recipients: &RecipientSet) -> String {
    format!("  encrypting to {}", recipients)
}

fn format_encrypting(path: &Path) -> String {
    format!("  encrypting {}", path.display())
}

fn format_summary(stats: &SyncStats, dry_run: bool) -> String {
    if dry_run {
        format!(
            "Dry-run: {} file(s) would be encrypted, {} up to date. No changes were made.",
            stats.encrypted, stats.up_to_date
        )
    } else {
        format!(
            "Encrypted {} file(s) ({}), {} up to date",
            stats.encrypted,
            HumanBytes(stats.bytes_written),
            stats.up_to_date
        )
    }
}
