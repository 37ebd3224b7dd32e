//! RecipientSet - who can decrypt the artifacts

use super::EncryptDirError;
use serde::Deserialize;
use std::fmt;

/// Ordered, non-empty list of recipient identifiers.
///
/// Identifiers are opaque and passed to the encryption capability verbatim,
/// one instruction per entry. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct RecipientSet(Vec<String>);

impl RecipientSet {
    /// Build a recipient set, rejecting an empty list
    pub fn new(recipients: Vec<String>) -> Result<Self, EncryptDirError> {
        if recipients.is_empty() {
            return Err(EncryptDirError::Config(
                "specify one or more recipients".to_string(),
            ));
        }
        Ok(Self(recipients))
    }

    /// Normalize raw `-r` arguments and build a set from them
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, EncryptDirError> {
        Self::new(normalize_recipients(args))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for RecipientSet {
    type Error = EncryptDirError;

    fn try_from(recipients: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(recipients)
    }
}

impl fmt::Display for RecipientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Flatten recipient arguments into individual recipients.
///
/// Each argument may contain several recipients separated by commas or
/// whitespace.
pub fn normalize_recipients<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
