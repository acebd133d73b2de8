// src/decryptor.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(ciphertext, password, algorithm, mode)?` for UTF-8
//! output. Helpers: `decrypt_with_encoding` for other text encodings,
//! `decrypt_bytes` for raw payloads.

use encoding_rs::Encoding;

use crate::error::PolycryptError;
use crate::key::DerivedKey;
use crate::selector::{CipherAlgorithm, CipherMode};
use crate::transform;

/// Decrypt `ciphertext` and decode the recovered bytes as UTF-8.
///
/// Key, IV and mode are derived exactly as on the encrypt side; `mode` must
/// match the selector used for encryption (or [`CipherMode::Default`] for
/// both sides).
///
/// # Errors
///
/// Wrong password, tampered ciphertext (for GCM: tag mismatch), a mode
/// mismatch, and malformed output bytes all surface as a single
/// [`Decryption`](PolycryptError::Decryption) error; the taxonomy does not
/// let callers tell these apart.
pub fn decrypt(
    ciphertext: &[u8],
    password: &[u8],
    algorithm: CipherAlgorithm,
    mode: CipherMode,
) -> Result<String, PolycryptError> {
    decrypt_with_encoding(ciphertext, password, algorithm, mode, encoding_rs::UTF_8)
}

/// Decrypt `ciphertext` and decode the recovered bytes with `encoding`.
pub fn decrypt_with_encoding(
    ciphertext: &[u8],
    password: &[u8],
    algorithm: CipherAlgorithm,
    mode: CipherMode,
    encoding: &'static Encoding,
) -> Result<String, PolycryptError> {
    let plaintext = decrypt_bytes(ciphertext, password, algorithm, mode)?;
    // No BOM sniffing: the bytes must be valid in the requested encoding as
    // they stand, and a leading U+FEFF belongs to the plaintext.
    let (text, had_errors) = encoding.decode_without_bom_handling(&plaintext);
    if had_errors {
        return Err(PolycryptError::Decryption(format!(
            "recovered bytes are not valid {}",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Decrypt to raw bytes. See [`decrypt`].
pub fn decrypt_bytes(
    ciphertext: &[u8],
    password: &[u8],
    algorithm: CipherAlgorithm,
    mode: CipherMode,
) -> Result<Vec<u8>, PolycryptError> {
    let effective = mode.resolve(algorithm);
    let key = DerivedKey::derive(password, algorithm);
    transform::decrypt_raw(algorithm, effective, key.as_bytes(), ciphertext)
        .map_err(|e| PolycryptError::Decryption(e.to_string()))
}
