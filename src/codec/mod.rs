// src/codec/mod.rs
//! Pluggable encryption codecs
//!
//! One capability contract, three variants. Not every codec supports every
//! operation: asymmetry is possible where encryption is one-way, and such
//! codecs return [`CryptoError::Unsupported`](crate::CryptoError::Unsupported)
//! instead of panicking. See [`crate::hashing`] for raw access to digests
//! without a codec.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;

pub use self::aes::AesCodec;
pub use self::md5::Md5Codec;
pub use self::passthrough::PassthroughCodec;

mod aes;
mod md5;
mod passthrough;

/// Shared handle to the process-wide PII codec. Constructed once at startup
/// and passed down explicitly.
pub type PiiCodec = Arc<dyn EncryptionCodec>;

/// Capability set implemented by every codec variant.
///
/// All operations are pure transforms over their inputs once the codec is
/// constructed, and safe to call concurrently without locks.
pub trait EncryptionCodec: Send + Sync {
    /// Encrypt the given clear text. Deterministic: identical input always
    /// produces identical output under the same codec.
    fn encrypt(&self, cleartext: &str) -> Result<String>;

    /// Decrypt text previously encrypted by this codec. Text encrypted under
    /// some other scheme produces gibberish or a
    /// [`CryptoError::Decryption`](crate::CryptoError::Decryption).
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Shortcut for the comparison the caller would otherwise spell out.
    /// Equivalent to either of
    /// - `codec.decrypt(ciphertext)? == cleartext`
    /// - `codec.encrypt(cleartext)? == ciphertext`
    ///
    /// which must always agree.
    fn compare(&self, cleartext: &str, ciphertext: &str) -> Result<bool> {
        Ok(self.encrypt(cleartext)? == ciphertext)
    }

    /// Succeeds iff `text` is plausibly a cipher text for this codec. Used as
    /// a constructor-time guard by [`PiiString`](crate::PiiString).
    fn assert_cipher_text(&self, text: &str) -> Result<()>;
}

/// Wire the PII codec from the resolved PII secret: present → AES, absent or
/// empty → passthrough. Decided once at startup, never re-evaluated.
pub fn select_pii_codec(pii_secret: Option<&str>) -> Result<PiiCodec> {
    match pii_secret {
        Some(secret) if !secret.is_empty() => {
            debug!("PII secret configured, wiring AES codec");
            Ok(Arc::new(AesCodec::new(secret)?))
        }
        _ => {
            debug!("no PII secret configured, wiring passthrough codec");
            Ok(Arc::new(PassthroughCodec))
        }
    }
}
