// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    /// A required configuration key was absent or unusable at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Key material was the wrong length or not valid hex.
    #[error("key format error: {0}")]
    KeyFormat(String),

    /// The password key was previously set and may not be set a second time.
    #[error("the password key was previously set and is not allowed to be set a second time")]
    KeyReuse,

    /// A codec operation ran before the password key was initialized.
    #[error("the password key must be set before the codec can be used")]
    KeyNotSet,

    /// Malformed hex, bad padding, or non-UTF-8 plaintext during decrypt.
    #[error("unable to decipher {ciphertext}: {reason}")]
    Decryption { ciphertext: String, reason: String },

    /// decrypt/assert_cipher_text called on a one-way codec.
    #[error("one-way codec cannot {0}")]
    Unsupported(&'static str),

    /// Validated PII construction was handed text that is not cipher text.
    #[error("not a valid cipher text: {0}")]
    Validation(String),

    /// HMAC setup rejected the algorithm or key. Callers treat this as
    /// "hash unavailable" and degrade rather than crash.
    #[error("unable to compute hash: {0}")]
    Hash(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
