// src/key.rs

//! Password-to-key derivation.
//!
//! The derivation the original wire format prescribes is a plain truncation:
//! the password bytes are cut to the cipher's maximum key length and
//! zero-padded up to the primitive's native key length when shorter. There is
//! no hashing and no stretching — a documented weakness kept for
//! compatibility, not a recommendation. See the crate-level security notes.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::selector::CipherAlgorithm;

/// Raw key material derived from a password for one cipher algorithm.
///
/// The buffer is always exactly the primitive's native key length and is
/// zeroized when dropped, on every exit path.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: Vec<u8>,
}

impl DerivedKey {
    /// Derive key material for `algorithm` by truncating/zero-padding
    /// `password`.
    ///
    /// An empty password is accepted (the key is then all zeros); rejecting
    /// it is left to callers with stricter policies.
    #[must_use]
    pub fn derive(password: &[u8], algorithm: CipherAlgorithm) -> Self {
        let mut bytes = vec![0u8; algorithm.key_len()];
        let take = password.len().min(bytes.len());
        bytes[..take].copy_from_slice(&password[..take]);
        Self { bytes }
    }

    /// The raw key bytes, sized to the primitive's native key length.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
