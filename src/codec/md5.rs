// src/codec/md5.rs
//! One-way codec backed by the MD5 digest
//!
//! Encrypting is hashing; there is no way back. `decrypt` and
//! `assert_cipher_text` always fail with the unsupported signal, and
//! `compare` works by re-hashing the clear text.

use crate::error::{CryptoError, Result};
use crate::hashing::md5_hex;

use super::EncryptionCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Codec;

impl EncryptionCodec for Md5Codec {
    fn encrypt(&self, cleartext: &str) -> Result<String> {
        Ok(md5_hex(cleartext))
    }

    fn decrypt(&self, _ciphertext: &str) -> Result<String> {
        Err(CryptoError::Unsupported("decrypt"))
    }

    fn assert_cipher_text(&self, _text: &str) -> Result<()> {
        Err(CryptoError::Unsupported("validate cipher text"))
    }
}
