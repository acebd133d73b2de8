// src/transform/aead.rs

//! GCM with a 128-bit tag and the fixed all-zero 96-bit nonce.
//!
//! GCM needs a 128-bit block, so only AES-256 and Twofish qualify; the
//! dispatch layer rejects Blowfish before reaching this module. The envelope
//! layout is whatever `aes-gcm` produces: ciphertext followed by the tag.

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::{AeadCore, Aes256Gcm, AesGcm};
use twofish::Twofish;

use super::TransformError;

/// Twofish in GCM with the same 96-bit nonce layout as the AES-256 alias.
type TwofishGcm = AesGcm<Twofish, <Aes256Gcm as AeadCore>::NonceSize>;

fn aead_encrypt<A>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    A: Aead + KeyInit,
{
    let aead = A::new_from_slice(key).map_err(|_| TransformError::KeyLength)?;
    // Fixed zero nonce, per the wire format. See the crate security notes.
    let nonce = Nonce::<A>::default();
    aead.encrypt(&nonce, plaintext)
        .map_err(|_| TransformError::Aead)
}

fn aead_decrypt<A>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    A: Aead + KeyInit,
{
    let aead = A::new_from_slice(key).map_err(|_| TransformError::KeyLength)?;
    let nonce = Nonce::<A>::default();
    aead.decrypt(&nonce, ciphertext)
        .map_err(|_| TransformError::Aead)
}

pub(crate) fn gcm_encrypt_aes256(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError> {
    aead_encrypt::<Aes256Gcm>(key, plaintext)
}

pub(crate) fn gcm_decrypt_aes256(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError> {
    aead_decrypt::<Aes256Gcm>(key, ciphertext)
}

pub(crate) fn gcm_encrypt_twofish(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError> {
    aead_encrypt::<TwofishGcm>(key, plaintext)
}

pub(crate) fn gcm_decrypt_twofish(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError> {
    aead_decrypt::<TwofishGcm>(key, ciphertext)
}
