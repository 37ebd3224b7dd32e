//! Command-line arguments

use crate::crypto::TrustModel;
use clap::Parser;
use std::path::PathBuf;

/// Encrypt a directory with GPG
#[derive(Debug, Parser)]
#[command(name = "encryptdir", version, about = "Encrypt a directory with GPG")]
pub struct Cli {
    /// Print each file as it is encrypted
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be encrypted without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// User IDs who should be able to decrypt (comma or space separated, can be repeated)
    #[arg(short = 'r', long = "recipient", value_name = "RECIPIENTS")]
    pub recipients: Vec<String>,

    /// Skip files matching this glob (can be repeated)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Read defaults from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Encryption program to run instead of `gpg`
    #[arg(long, value_name = "PROGRAM")]
    pub gpg: Option<String>,

    /// GnuPG trust model
    #[arg(long, value_enum, value_name = "MODEL")]
    pub trust_model: Option<TrustModel>,

    /// Input directory
    #[arg(value_name = "INDIR")]
    pub source: PathBuf,

    /// Output directory
    #[arg(value_name = "OUTDIR")]
    pub destination: PathBuf,
}
