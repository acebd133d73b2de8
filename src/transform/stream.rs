// src/transform/stream.rs

//! Stream-style modes: CFB (full-block and 8-bit segments) and OFB.
//!
//! None of these pad; ciphertext length equals plaintext length. OFB is its
//! own inverse, so one keystream application serves both directions. The OFB
//! entry points are monomorphic type aliases because the `ofb` crate wraps
//! its core in `StreamCipherCoreWrapper`, whose bounds are concrete-type
//! business, not this module's.

use cipher::{AsyncStreamCipher, BlockCipher, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher};

use super::TransformError;

pub(crate) fn cfb_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let enc =
        cfb_mode::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    let mut buf = plaintext.to_vec();
    enc.encrypt(&mut buf);
    Ok(buf)
}

pub(crate) fn cfb_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let dec =
        cfb_mode::Decryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    let mut buf = ciphertext.to_vec();
    dec.decrypt(&mut buf);
    Ok(buf)
}

pub(crate) fn cfb8_encrypt<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let enc =
        cfb8::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    let mut buf = plaintext.to_vec();
    enc.encrypt(&mut buf);
    Ok(buf)
}

pub(crate) fn cfb8_decrypt<C>(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TransformError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let dec =
        cfb8::Decryptor::<C>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
    let mut buf = ciphertext.to_vec();
    dec.decrypt(&mut buf);
    Ok(buf)
}

type OfbAes256 = ofb::Ofb<aes::Aes256>;
type OfbBlowfish = ofb::Ofb<blowfish::Blowfish>;
type OfbTwofish = ofb::Ofb<twofish::Twofish>;

macro_rules! ofb_apply {
    ($name:ident, $cipher:ty) => {
        pub(crate) fn $name(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, TransformError> {
            let mut ofb = <$cipher>::new_from_slices(key, iv).map_err(|_| TransformError::KeyLength)?;
            let mut buf = data.to_vec();
            ofb.apply_keystream(&mut buf);
            Ok(buf)
        }
    };
}

ofb_apply!(ofb_aes256, OfbAes256);
ofb_apply!(ofb_blowfish, OfbBlowfish);
ofb_apply!(ofb_twofish, OfbTwofish);
