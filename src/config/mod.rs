//! Configuration management

mod cli;
mod file;

pub use cli::Cli;
pub use file::FileConfig;

use crate::crypto::GpgOptions;
use crate::types::{normalize_recipients, EncryptDirError, RecipientSet};
use std::path::{Path, PathBuf};

/// Global configuration for encryptdir
#[derive(Debug, Clone)]
pub struct Config {
    /// Plaintext directory
    pub source: PathBuf,

    /// Encrypted mirror
    pub destination: PathBuf,

    /// Who can decrypt the artifacts
    pub recipients: RecipientSet,

    /// Print a line for every file that gets encrypted
    pub verbose: bool,

    /// Dry run (report, don't encrypt or write)
    pub dry_run: bool,

    /// Exclude patterns (globs, relative to the source root)
    pub exclude_patterns: Vec<String>,

    /// How the encryption program is invoked
    pub gpg: GpgOptions,
}

impl Config {
    /// Configuration with default flags and gpg options
    pub fn new(source: PathBuf, destination: PathBuf, recipients: RecipientSet) -> Self {
        Self {
            source,
            destination,
            recipients,
            verbose: false,
            dry_run: false,
            exclude_patterns: Vec::new(),
            gpg: GpgOptions::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), EncryptDirError> {
        if self.source == self.destination {
            return Err(EncryptDirError::Config(
                "Source and destination cannot be the same".to_string(),
            ));
        }

        if resolve(&self.destination).starts_with(resolve(&self.source)) {
            return Err(EncryptDirError::Config(format!(
                "Destination {:?} cannot be inside the source directory {:?}",
                self.destination, self.source
            )));
        }

        if self.gpg.program.trim().is_empty() {
            return Err(EncryptDirError::Config(
                "Encryption program cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = EncryptDirError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let mut raw_recipients = file.recipients;
        raw_recipients.extend(cli.recipients);
        let recipients = RecipientSet::new(normalize_recipients(raw_recipients.as_slice()))?;

        let mut exclude_patterns = file.exclude;
        exclude_patterns.extend(cli.exclude);

        let mut gpg = file.gpg;
        if let Some(program) = cli.gpg {
            gpg.program = program;
        }
        if let Some(trust_model) = cli.trust_model {
            gpg.trust_model = trust_model;
        }

        let config = Config {
            source: cli.source,
            destination: cli.destination,
            recipients,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
            exclude_patterns,
            gpg,
        };
        config.validate()?;
        Ok(config)
    }
}

// Absolute path with its longest existing prefix canonicalized, so a
// destination that does not exist yet compares against the real source.
fn resolve(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut missing = Vec::new();
    let mut existing = absolute.as_path();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return missing
                .iter()
                .rev()
                .fold(canonical, |resolved, name| resolved.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return absolute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn recipients() -> RecipientSet {
        RecipientSet::new(vec!["alice@example.com".to_string()]).unwrap()
    }

    #[test]
    fn test_same_source_and_destination_rejected() {
        let config = Config::new(PathBuf::from("/data"), PathBuf::from("/data"), recipients());
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_destination_inside_source_rejected() {
        let config = Config::new(
            PathBuf::from("/data"),
            PathBuf::from("/data/encrypted"),
            recipients(),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("inside the source"));
    }

    #[test]
    fn test_sibling_directories_accepted() {
        let config = Config::new(
            PathBuf::from("/data/plain"),
            PathBuf::from("/data/plain-encrypted"),
            recipients(),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_destination_inside_existing_source_rejected() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("plain");
        fs::create_dir(&source).unwrap();

        let config = Config::new(source.clone(), source.join("enc/nested"), recipients());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("inside the source"));
    }

    #[test]
    fn test_relative_destination_inside_relative_source_rejected() {
        // The working directory exists, the destination below it does not.
        let config = Config::new(
            PathBuf::from("."),
            PathBuf::from("encryptdir-not-yet-created/enc"),
            recipients(),
        );
        assert!(config.validate().unwrap_err().is_config_error());

        let config = Config::new(
            PathBuf::from("src"),
            PathBuf::from("./src/../src/enc"),
            recipients(),
        );
        assert!(config.validate().unwrap_err().is_config_error());
    }

    #[test]
    fn test_relative_sibling_destination_accepted() {
        let config = Config::new(
            PathBuf::from("src"),
            PathBuf::from("src-encrypted"),
            recipients(),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_conversion() {
        let cli = Cli::parse_from([
            "encryptdir",
            "-v",
            "-n",
            "-r",
            "alice@example.com,bob@example.com",
            "-r",
            "carol@example.com",
            "--exclude",
            "*.swp",
            "in",
            "out",
        ]);
        let config = Config::try_from(cli).unwrap();

        assert!(config.verbose);
        assert!(config.dry_run);
        assert_eq!(config.recipients.len(), 3);
        assert_eq!(config.exclude_patterns, vec!["*.swp"]);
        assert_eq!(config.source, PathBuf::from("in"));
        assert_eq!(config.destination, PathBuf::from("out"));
        assert_eq!(config.gpg, GpgOptions::default());
    }

    #[test]
    fn test_cli_without_recipients_fails() {
        let cli = Cli::parse_from(["encryptdir", "in", "out"]);
        let err = Config::try_from(cli).unwrap_err();
        assert!(err.to_string().contains("specify one or more recipients"));
    }

    #[test]
    fn test_cli_merges_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("encryptdir.toml");
        fs::write(
            &config_path,
            r#"
            recipients = ["alice@example.com"]
            exclude = ["*.tmp"]

            [gpg]
            program = "gpg2"
            trust_model = "pgp"
            "#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "encryptdir",
            "--config",
            config_path.to_str().unwrap(),
            "-r",
            "bob@example.com",
            "--exclude",
            "cache/",
            "--gpg",
            "/usr/local/bin/gpg",
            "in",
            "out",
        ]);
        let config = Config::try_from(cli).unwrap();

        let recipients: Vec<&str> = config.recipients.iter().collect();
        assert_eq!(recipients, vec!["alice@example.com", "bob@example.com"]);
        assert_eq!(config.exclude_patterns, vec!["*.tmp", "cache/"]);
        assert_eq!(config.gpg.program, "/usr/local/bin/gpg");
        assert_eq!(config.gpg.trust_model, crate::crypto::TrustModel::Pgp);
    }
}
