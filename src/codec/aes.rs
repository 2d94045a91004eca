// src/codec/aes.rs
//! Codec backed by AES-128-ECB with PKCS#7 padding, hex-encoded
//!
//! The key must be exactly 32 hex characters (128 bits) — the lowest common
//! denominator guaranteed across target platforms. ECB with no IV makes
//! encryption deterministic: identical inputs under the same key always yield
//! identical ciphertext, which callers rely on for equality comparisons.
//! Previously stored ciphertext round-trips through this exact construction;
//! changing the mode breaks compatibility with persisted values.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use aes::Aes128;
use ecb::{Decryptor, Encryptor};

use crate::consts::{AES_KEY_LEN_BYTES, AES_KEY_LEN_HEX};
use crate::error::{CryptoError, Result};

use super::EncryptionCodec;

type Aes128EcbEnc = Encryptor<Aes128>;
type Aes128EcbDec = Decryptor<Aes128>;

/// AES codec over a fixed 128-bit key.
pub struct AesCodec {
    password_key: Option<[u8; AES_KEY_LEN_BYTES]>,
}

// Key material stays out of debug output.
impl std::fmt::Debug for AesCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesCodec")
            .field("initialized", &self.password_key.is_some())
            .finish()
    }
}

impl AesCodec {
    /// Creates an initialized codec from a 32-hex-character password key.
    pub fn new(password_key: &str) -> Result<Self> {
        let mut codec = Self::uninitialized();
        codec.set_password_key(password_key)?;
        Ok(codec)
    }

    /// Creates an uninitialized codec. [`set_password_key`] must be called
    /// before any other method.
    ///
    /// [`set_password_key`]: AesCodec::set_password_key
    pub fn uninitialized() -> Self {
        Self { password_key: None }
    }

    /// Sets the password key. The key may be set at most once per instance;
    /// a second attempt fails with [`CryptoError::KeyReuse`] even when the
    /// value is identical.
    pub fn set_password_key(&mut self, password_key: &str) -> Result<()> {
        if self.password_key.is_some() {
            return Err(CryptoError::KeyReuse);
        }
        if password_key.len() != AES_KEY_LEN_HEX {
            return Err(CryptoError::KeyFormat(format!(
                "the password key must be exactly {AES_KEY_LEN_HEX} hex characters long but was {}",
                password_key.len()
            )));
        }
        let raw = hex::decode(password_key)
            .map_err(|e| CryptoError::KeyFormat(format!("password key is not valid hex: {e}")))?;

        let mut key = [0u8; AES_KEY_LEN_BYTES];
        key.copy_from_slice(&raw);
        self.password_key = Some(key);
        Ok(())
    }

    fn key(&self) -> Result<&[u8; AES_KEY_LEN_BYTES]> {
        self.password_key.as_ref().ok_or(CryptoError::KeyNotSet)
    }

    fn encrypt_bytes(&self, cleartext: &[u8]) -> Result<Vec<u8>> {
        let key = self.key()?;
        Ok(Aes128EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(cleartext))
    }

    fn decrypt_bytes(&self, ciphertext: &str) -> Result<Vec<u8>> {
        let key = self.key()?;
        let raw = hex::decode(ciphertext).map_err(|_| CryptoError::Decryption {
            ciphertext: ciphertext.to_string(),
            reason: "not valid hex".to_string(),
        })?;
        Aes128EcbDec::new(key.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&raw)
            .map_err(|_| CryptoError::Decryption {
                ciphertext: ciphertext.to_string(),
                reason: "bad block length or padding".to_string(),
            })
    }
}

impl EncryptionCodec for AesCodec {
    fn encrypt(&self, cleartext: &str) -> Result<String> {
        Ok(hex::encode(self.encrypt_bytes(cleartext.as_bytes())?))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let cleartext = self.decrypt_bytes(ciphertext)?;
        String::from_utf8(cleartext).map_err(|_| CryptoError::Decryption {
            ciphertext: ciphertext.to_string(),
            reason: "plaintext is not valid UTF-8".to_string(),
        })
    }

    fn assert_cipher_text(&self, text: &str) -> Result<()> {
        self.decrypt(text).map(|_| ())
    }
}
