//! Encryption capability
//!
//! The synchronizer never encrypts anything itself. It hands a plaintext
//! file and an output file to an [`Encryptor`] and only looks at whether the
//! call succeeded.

mod gpg;

pub use gpg::{GpgEncryptor, GpgOptions, TrustModel};

use crate::types::{EncryptFailure, RecipientSet};
use std::fs::File;

/// Something that can turn plaintext into ciphertext for a set of recipients
pub trait Encryptor {
    /// Read all of `plaintext`, write the ciphertext to `ciphertext`.
    ///
    /// Returning `Ok` means the output is complete. On `Err` the output file
    /// may hold anything, including partial data.
    fn encrypt(
        &self,
        plaintext: File,
        ciphertext: File,
        recipients: &RecipientSet,
    ) -> Result<(), EncryptFailure>;
}
