// src/codec/passthrough.rs
//! Does no encryption at all — the identity codec
//!
//! Wired as the PII codec when no PII secret is configured, so the rest of
//! the system can treat encryption as always-on.

use crate::error::Result;

use super::EncryptionCodec;

#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCodec;

impl EncryptionCodec for PassthroughCodec {
    fn encrypt(&self, cleartext: &str) -> Result<String> {
        Ok(cleartext.to_string())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(ciphertext.to_string())
    }

    fn assert_cipher_text(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}
