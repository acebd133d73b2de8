// src/error.rs

//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, PolycryptError>`](PolycryptError).

use thiserror::Error;

/// The error type for all facade operations.
///
/// The taxonomy is deliberately flat: every failure on the encryption path is
/// an [`Encryption`](PolycryptError::Encryption) error and every failure on
/// the decryption path is a [`Decryption`](PolycryptError::Decryption) error,
/// each carrying only the underlying failure description. Callers cannot
/// distinguish an invalid key length from an unsupported mode, or a wrong
/// password from tampered ciphertext — the underlying primitives do not leak
/// that distinction either.
#[derive(Error, Debug)]
pub enum PolycryptError {
    /// Encryption failed.
    ///
    /// Raised for any failure while configuring or driving the primitive on
    /// the encrypt path, e.g.:
    /// - a mode that is unavailable for the selected cipher (GCM with a
    ///   64-bit block cipher, CTS, OFB-8)
    /// - an invalid key length reported by the primitive
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption failed.
    ///
    /// Raised for any failure on the decrypt path, e.g.:
    /// - authentication-tag mismatch (GCM)
    /// - bad padding or misaligned ciphertext (CBC, ECB)
    /// - recovered bytes that are malformed under the requested text encoding
    /// - a mode that is unavailable for the selected cipher
    #[error("Decryption error: {0}")]
    Decryption(String),
}
