// src/transform/block.rs

//! Padded block modes: CBC and ECB with PKCS#7.

use cipher::block_padding::Pkcs7;
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use super::TransformError;

pub(crate) fn cbc_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let enc = cbc::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

pub(crate) fn cbc_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let dec = cbc::Decryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| TransformError::Padding)
}

pub(crate) fn ecb_encrypt<C>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let enc = ecb::Encryptor::<C>::new_from_slice(key).map_err(|_| TransformError::KeyLength)?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

pub(crate) fn ecb_decrypt<C>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let dec = ecb::Decryptor::<C>::new_from_slice(key).map_err(|_| TransformError::KeyLength)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| TransformError::Padding)
}
