// src/transform/mod.rs

//! Primitive-driving layer.
//!
//! Dispatches a resolved `(algorithm, mode)` pair to the delegated RustCrypto
//! implementation. Everything here takes raw key bytes sized to the
//! primitive's native key length; the facade owns derivation and the uniform
//! error wrapping. A fresh primitive instance is constructed per call — no
//! cipher state is ever shared or reused.

pub(crate) mod aead;
pub(crate) mod block;
pub(crate) mod stream;

use aes::Aes256;
use blowfish::Blowfish;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit};
use thiserror::Error;
use twofish::Twofish;

use crate::selector::{CipherAlgorithm, CipherMode};

/// Internal transform failure; flattened into [`crate::PolycryptError`] at
/// the facade boundary. Only the message survives.
#[derive(Debug, Error)]
pub(crate) enum TransformError {
    #[error("invalid key length for the selected cipher")]
    KeyLength,
    #[error("bad padding or misaligned ciphertext")]
    Padding,
    #[error("authentication failed or ciphertext is corrupted")]
    Aead,
    #[error("{0}")]
    Unsupported(&'static str),
}

const CTS_UNAVAILABLE: &str = "ciphertext stealing is not available in the delegated cipher stack";
const OFB8_UNAVAILABLE: &str = "OFB with 8-bit feedback is not available in the delegated cipher stack";
const GCM_NEEDS_WIDE_BLOCK: &str = "GCM requires a cipher with 128-bit blocks";
const UNRESOLVED_MODE: &str = "mode selector was not resolved";

pub(crate) fn encrypt_raw(
    algorithm: CipherAlgorithm,
    mode: CipherMode,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, TransformError> {
    let iv = vec![0u8; algorithm.block_len()];
    match algorithm {
        CipherAlgorithm::Aes256 => match mode {
            CipherMode::Gcm => aead::gcm_encrypt_aes256(key, plaintext),
            CipherMode::Ofb => stream::ofb_aes256(key, &iv, plaintext),
            m => encrypt_block_mode::<Aes256>(m, key, &iv, plaintext),
        },
        CipherAlgorithm::Blowfish => match mode {
            CipherMode::Gcm => Err(TransformError::Unsupported(GCM_NEEDS_WIDE_BLOCK)),
            CipherMode::Ofb => stream::ofb_blowfish(key, &iv, plaintext),
            m => encrypt_block_mode::<Blowfish>(m, key, &iv, plaintext),
        },
        CipherAlgorithm::Twofish => match mode {
            CipherMode::Gcm => aead::gcm_encrypt_twofish(key, plaintext),
            CipherMode::Ofb => stream::ofb_twofish(key, &iv, plaintext),
            m => encrypt_block_mode::<Twofish>(m, key, &iv, plaintext),
        },
    }
}

pub(crate) fn decrypt_raw(
    algorithm: CipherAlgorithm,
    mode: CipherMode,
    key: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, TransformError> {
    let iv = vec![0u8; algorithm.block_len()];
    match algorithm {
        CipherAlgorithm::Aes256 => match mode {
            CipherMode::Gcm => aead::gcm_decrypt_aes256(key, ciphertext),
            CipherMode::Ofb => stream::ofb_aes256(key, &iv, ciphertext),
            m => decrypt_block_mode::<Aes256>(m, key, &iv, ciphertext),
        },
        CipherAlgorithm::Blowfish => match mode {
            CipherMode::Gcm => Err(TransformError::Unsupported(GCM_NEEDS_WIDE_BLOCK)),
            CipherMode::Ofb => stream::ofb_blowfish(key, &iv, ciphertext),
            m => decrypt_block_mode::<Blowfish>(m, key, &iv, ciphertext),
        },
        CipherAlgorithm::Twofish => match mode {
            CipherMode::Gcm => aead::gcm_decrypt_twofish(key, ciphertext),
            CipherMode::Ofb => stream::ofb_twofish(key, &iv, ciphertext),
            m => decrypt_block_mode::<Twofish>(m, key, &iv, ciphertext),
        },
    }
}

fn encrypt_block_mode<C>(
    mode: CipherMode,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    match mode {
        CipherMode::Cbc => block::cbc_encrypt::<C>(key, iv, plaintext),
        CipherMode::Ecb => block::ecb_encrypt::<C>(key, plaintext),
        CipherMode::Cfb | CipherMode::Cfs => stream::cfb_encrypt::<C>(key, iv, plaintext),
        CipherMode::Cfb8 | CipherMode::Cfs8 => stream::cfb8_encrypt::<C>(key, iv, plaintext),
        CipherMode::Cts => Err(TransformError::Unsupported(CTS_UNAVAILABLE)),
        CipherMode::Ofb8 => Err(TransformError::Unsupported(OFB8_UNAVAILABLE)),
        // GCM and OFB are dispatched per algorithm; Default is resolved at
        // the facade.
        CipherMode::Gcm | CipherMode::Ofb | CipherMode::Default => {
            Err(TransformError::Unsupported(UNRESOLVED_MODE))
        }
    }
}

fn decrypt_block_mode<C>(
    mode: CipherMode,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
{
    match mode {
        CipherMode::Cbc => block::cbc_decrypt::<C>(key, iv, ciphertext),
        CipherMode::Ecb => block::ecb_decrypt::<C>(key, ciphertext),
        CipherMode::Cfb | CipherMode::Cfs => stream::cfb_decrypt::<C>(key, iv, ciphertext),
        CipherMode::Cfb8 | CipherMode::Cfs8 => stream::cfb8_decrypt::<C>(key, iv, ciphertext),
        CipherMode::Cts => Err(TransformError::Unsupported(CTS_UNAVAILABLE)),
        CipherMode::Ofb8 => Err(TransformError::Unsupported(OFB8_UNAVAILABLE)),
        CipherMode::Gcm | CipherMode::Ofb | CipherMode::Default => {
            Err(TransformError::Unsupported(UNRESOLVED_MODE))
        }
    }
}
