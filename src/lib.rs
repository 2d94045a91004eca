// src/lib.rs
//! pii-codec — pluggable string-encryption codecs for PII at rest
//!
//! Features:
//! - AES-128-ECB codec with hex-encoded ciphertext (deterministic, no IV)
//! - One-way MD5 codec and identity passthrough codec
//! - `PiiString` wrapper with lazy, memoized clear-text access
//! - HMAC / MD5 signing helpers for token verification

pub mod codec;
pub mod config;
pub mod consts;
pub mod error;
pub mod hashing;
pub mod pii;

// Re-export everything users need at the crate root
pub use codec::{select_pii_codec, AesCodec, EncryptionCodec, Md5Codec, PassthroughCodec, PiiCodec};
pub use config::{ConfigMap, CryptoConfig};
pub use error::{CryptoError, Result};
pub use pii::PiiString;
