//! Shared helpers for integration tests

#![allow(dead_code)]

use encryptdir::{EncryptFailure, Encryptor, RecipientSet};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Deterministic stand-in for gpg: `ENC[r1,r2]:<plaintext>`
///
/// Records every plaintext it was handed, in call order.
#[derive(Default)]
pub struct FakeEncryptor {
    pub calls: Mutex<Vec<Vec<u8>>>,
    /// Fail with status code 2 when the plaintext equals this
    pub fail_on: Option<Vec<u8>>,
    /// Report success without writing anything
    pub write_nothing: bool,
}

impl FakeEncryptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(content: &[u8]) -> Self {
        Self {
            fail_on: Some(content.to_vec()),
            ..Self::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            write_nothing: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn plaintexts(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn ciphertext_for(plaintext: &[u8], recipients: &[&str]) -> Vec<u8> {
    let mut out = format!("ENC[{}]:", recipients.join(",")).into_bytes();
    out.extend_from_slice(plaintext);
    out
}

impl Encryptor for FakeEncryptor {
    fn encrypt(
        &self,
        mut plaintext: File,
        mut ciphertext: File,
        recipients: &RecipientSet,
    ) -> Result<(), EncryptFailure> {
        let mut content = Vec::new();
        plaintext.read_to_end(&mut content)?;
        self.calls.lock().unwrap().push(content.clone());

        if self.fail_on.as_deref() == Some(content.as_slice()) {
            // Simulate a tool that dies midway through its output
            ciphertext.write_all(b"PARTIAL")?;
            return Err(EncryptFailure::Status {
                program: "fake-gpg".to_string(),
                code: 2,
            });
        }

        if !self.write_nothing {
            let names: Vec<&str> = recipients.iter().collect();
            ciphertext.write_all(&ciphertext_for(&content, &names))?;
        }
        Ok(())
    }
}

pub fn recipients(list: &[&str]) -> RecipientSet {
    RecipientSet::from_args(list).expect("non-empty recipients")
}

pub fn set_mtime(path: &Path, mtime: SystemTime) {
    filetime::set_file_mtime(path, filetime::FileTime::from_system_time(mtime))
        .expect("Failed to set mtime");
}

/// An hour in the past, well clear of filesystem timestamp granularity
pub fn an_hour_ago() -> SystemTime {
    SystemTime::now() - Duration::from_secs(3600)
}

pub fn write_old(path: &Path, content: &[u8]) {
    std::fs::write(path, content).expect("write source file");
    set_mtime(path, an_hour_ago());
}
