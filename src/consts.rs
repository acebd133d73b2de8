// src/consts.rs

//! Global constants: native key and block lengths per cipher, GCM parameters.

/// AES-256 key length in bytes.
pub const AES256_KEY_LEN: usize = 32;

/// Blowfish maximum key length in bytes (448 bits).
pub const BLOWFISH_KEY_LEN: usize = 56;

/// Twofish maximum key length in bytes.
pub const TWOFISH_KEY_LEN: usize = 32;

/// AES block length in bytes.
pub const AES256_BLOCK_LEN: usize = 16;

/// Blowfish block length in bytes.
pub const BLOWFISH_BLOCK_LEN: usize = 8;

/// Twofish block length in bytes.
pub const TWOFISH_BLOCK_LEN: usize = 16;

/// GCM nonce length in bytes (96 bits).
pub const GCM_NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes (fixed at 128 bits).
pub const GCM_TAG_LEN: usize = 16;
