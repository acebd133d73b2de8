// src/lib.rs

//! Password-based symmetric encryption facade over AES-256, Blowfish and
//! Twofish.
//!
//! This crate selects a cipher primitive and a mode of operation, derives a
//! key from a password, and drives the audited RustCrypto implementations of
//! the actual transforms. It contains no cipher mathematics of its own.
//!
//! ```
//! use polycrypt_rs::{decrypt, encrypt, CipherAlgorithm, CipherMode};
//!
//! let password = b"some_very_secret_phrase0815";
//! let ciphertext = encrypt("HELLO WORLD", password, CipherAlgorithm::Aes256, CipherMode::Default)?;
//! let plaintext = decrypt(&ciphertext, password, CipherAlgorithm::Aes256, CipherMode::Default)?;
//! assert_eq!(plaintext, "HELLO WORLD");
//! # Ok::<(), polycrypt_rs::PolycryptError>(())
//! ```
//!
//! # Security notes
//!
//! The wire format this crate is compatible with has two serious weaknesses,
//! reproduced here deliberately rather than fixed silently:
//!
//! - **Fixed all-zero IV.** Every encryption under the same password and mode
//!   uses an all-zero IV (a zero 96-bit nonce for GCM). Ciphertext is
//!   therefore deterministic: encrypting related plaintexts under one key
//!   leaks their relationship, and nonce reuse voids GCM's confidentiality
//!   and integrity guarantees across messages. The corrected design — a
//!   random IV per encryption, prepended to the envelope — changes the wire
//!   format and is out of scope here.
//! - **Truncation key derivation.** The password bytes are truncated to the
//!   cipher's maximum key length with no hashing or stretching. A real system
//!   should use a memory-hard KDF.
//!
//! Do not use this crate to protect new data; it exists to interoperate with
//! systems that already speak this format.

pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod key;
pub mod selector;

mod transform;

// High-level API — this is what 99% of users import
pub use decryptor::{decrypt, decrypt_bytes, decrypt_with_encoding};
pub use encryptor::{encrypt, encrypt_bytes};
pub use error::PolycryptError;
pub use key::DerivedKey;
pub use selector::{CipherAlgorithm, CipherMode};
