// src/encryptor.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(plaintext, password, algorithm, mode)?` for strings,
//! `encrypt_bytes` for raw payloads.

use crate::error::PolycryptError;
use crate::key::DerivedKey;
use crate::selector::{CipherAlgorithm, CipherMode};
use crate::transform;

/// Encrypt the UTF-8 bytes of `plaintext` under a password-derived key.
///
/// `mode` may be [`CipherMode::Default`], which resolves to GCM for AES-256
/// and CBC otherwise. The plaintext (and the password) may be empty.
///
/// # Errors
///
/// Any primitive-level failure — invalid key length, a mode the selected
/// cipher cannot run — is re-raised as a single
/// [`Encryption`](PolycryptError::Encryption) error carrying the underlying
/// message.
pub fn encrypt(
    plaintext: &str,
    password: &[u8],
    algorithm: CipherAlgorithm,
    mode: CipherMode,
) -> Result<Vec<u8>, PolycryptError> {
    encrypt_bytes(plaintext.as_bytes(), password, algorithm, mode)
}

/// Encrypt raw bytes. See [`encrypt`].
pub fn encrypt_bytes(
    plaintext: &[u8],
    password: &[u8],
    algorithm: CipherAlgorithm,
    mode: CipherMode,
) -> Result<Vec<u8>, PolycryptError> {
    let effective = mode.resolve(algorithm);
    // Key material lives only for this call; DerivedKey zeroizes on drop,
    // error path included.
    let key = DerivedKey::derive(password, algorithm);
    transform::encrypt_raw(algorithm, effective, key.as_bytes(), plaintext)
        .map_err(|e| PolycryptError::Encryption(e.to_string()))
}
