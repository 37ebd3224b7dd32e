//! Optional TOML configuration file

use crate::crypto::GpgOptions;
use crate::types::{map_file_error, EncryptDirError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings that can live in a config file instead of on the command line
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Recipients, each entry normalized like a `-r` argument
    pub recipients: Vec<String>,

    /// Exclude globs
    pub exclude: Vec<String>,

    /// Encryption program settings
    pub gpg: GpgOptions,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, EncryptDirError> {
        let content = fs::read_to_string(path).map_err(|e| map_file_error(path, e))?;
        Self::parse(&content).map_err(|e| {
            EncryptDirError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
