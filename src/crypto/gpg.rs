//! GnuPG-backed encryptor

use super::Encryptor;
use crate::types::{EncryptFailure, RecipientSet};
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// GnuPG `--trust-model` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrustModel {
    /// Skip key validation entirely (unattended runs)
    #[default]
    Always,
    Pgp,
    Classic,
    Direct,
    Tofu,
    #[serde(rename = "tofu+pgp")]
    #[value(name = "tofu+pgp")]
    TofuPgp,
    Auto,
}

impl TrustModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustModel::Always => "always",
            TrustModel::Pgp => "pgp",
            TrustModel::Classic => "classic",
            TrustModel::Direct => "direct",
            TrustModel::Tofu => "tofu",
            TrustModel::TofuPgp => "tofu+pgp",
            TrustModel::Auto => "auto",
        }
    }
}

/// How the gpg command line is put together
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GpgOptions {
    /// Program to run
    pub program: String,

    /// Value for `--trust-model`
    pub trust_model: TrustModel,

    /// Let gpg add its configured default recipient
    pub default_recipient: bool,

    /// Honor `encrypt-to` keys from gpg.conf
    pub encrypt_to: bool,

    /// Alternate GnuPG home directory
    pub homedir: Option<PathBuf>,
}

impl Default for GpgOptions {
    fn default() -> Self {
        Self {
            program: "gpg".to_string(),
            trust_model: TrustModel::Always,
            default_recipient: false,
            encrypt_to: false,
            homedir: None,
        }
    }
}

impl GpgOptions {
    /// Arguments passed to the program, recipients last
    pub fn build_args(&self, recipients: &RecipientSet) -> Vec<String> {
        let mut args = vec![
            "-e".to_string(),
            "--batch".to_string(),
            format!("--trust-model={}", self.trust_model.as_str()),
        ];
        if !self.default_recipient {
            args.push("--no-default-recipient".to_string());
        }
        if !self.encrypt_to {
            args.push("--no-encrypt-to".to_string());
        }
        if let Some(homedir) = &self.homedir {
            args.push("--homedir".to_string());
            args.push(homedir.to_string_lossy().into_owned());
        }
        for recipient in recipients.iter() {
            args.push("-r".to_string());
            args.push(recipient.to_string());
        }
        args
    }
}

/// Runs gpg with the plaintext on stdin and the ciphertext on stdout
#[derive(Debug, Clone, Default)]
pub struct GpgEncryptor {
    options: GpgOptions,
}

impl GpgEncryptor {
    pub fn new(options: GpgOptions) -> Self {
        Self { options }
    }
}

impl Encryptor for GpgEncryptor {
    fn encrypt(
        &self,
        plaintext: File,
        ciphertext: File,
        recipients: &RecipientSet,
    ) -> Result<(), EncryptFailure> {
        let args = self.options.build_args(recipients);
        debug!(program = %self.options.program, ?args, "running encryption program");

        let status = Command::new(&self.options.program)
            .args(&args)
            .stdin(Stdio::from(plaintext))
            .stdout(Stdio::from(ciphertext))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| EncryptFailure::Launch {
                program: self.options.program.clone(),
                source: e,
            })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(EncryptFailure::Status {
                program: self.options.program.clone(),
                code,
            }),
            None => Err(EncryptFailure::Terminated {
                program: self.options.program.clone(),
            }),
        }
    }
}
