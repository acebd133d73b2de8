//! tests/common.rs
//! Common constants and helpers shared across test files

use polycrypt_rs::{CipherAlgorithm, CipherMode};

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"some_very_secret_phrase0815";

/// Standard test plaintext used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &str = "HELLO WORLD";

/// All cipher selectors
#[allow(dead_code)] // Used across multiple test files
pub const ALGORITHMS: &[CipherAlgorithm] = &[
    CipherAlgorithm::Aes256,
    CipherAlgorithm::Blowfish,
    CipherAlgorithm::Twofish,
];

/// The modes a given algorithm actually supports (CTS and OFB-8 are rejected
/// for everything; GCM needs 128-bit blocks, which rules out Blowfish).
#[allow(dead_code)] // Used across multiple test files
pub fn supported_modes(algorithm: CipherAlgorithm) -> Vec<CipherMode> {
    let mut modes = vec![
        CipherMode::Cbc,
        CipherMode::Ecb,
        CipherMode::Cfb,
        CipherMode::Cfb8,
        CipherMode::Cfs,
        CipherMode::Cfs8,
        CipherMode::Ofb,
    ];
    if algorithm != CipherAlgorithm::Blowfish {
        modes.push(CipherMode::Gcm);
    }
    modes
}
