// src/hashing.rs
//! Stateless hashing and signing helpers
//!
//! Raw access to digests without going through a codec: HMAC computation for
//! request signing, MD5 helpers for legacy password checks, and symmetric key
//! generation. Everything here is a pure function over its inputs.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use rand::RngCore;
use sha1::Sha1;
use sha2::Sha256;
use tracing::error;

use crate::consts::AES_KEY_LEN_BYTES;
use crate::error::{CryptoError, Result};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// HMAC algorithms available for signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha1,
    Sha256,
}

/// Computes an HMAC over the given text fragments, MAC'd in order.
///
/// A rejected key surfaces as [`CryptoError::Hash`] so callers can treat the
/// signature as unavailable and degrade instead of crashing.
pub fn compute_hmac(algorithm: HmacAlgorithm, secret: &str, plain_text: &[&str]) -> Result<Vec<u8>> {
    match algorithm {
        HmacAlgorithm::Sha1 => {
            let mac = HmacSha1::new_from_slice(secret.as_bytes()).map_err(hash_unavailable)?;
            Ok(finalize(mac, plain_text))
        }
        HmacAlgorithm::Sha256 => {
            let mac = HmacSha256::new_from_slice(secret.as_bytes()).map_err(hash_unavailable)?;
            Ok(finalize(mac, plain_text))
        }
    }
}

fn finalize<M: Mac>(mut mac: M, plain_text: &[&str]) -> Vec<u8> {
    for value in plain_text {
        mac.update(value.as_bytes());
    }
    mac.finalize().into_bytes().as_slice().to_vec()
}

fn hash_unavailable(e: hmac::digest::InvalidLength) -> CryptoError {
    error!("invalid key, unable to compute hash: {e}");
    CryptoError::Hash(format!("invalid key: {e}"))
}

/// Hex-encoded HMAC-SHA-256 of `value` under `secret` — the request-signing
/// helper.
pub fn hmac_sha256_hex(value: &str, secret: &str) -> Result<String> {
    let hash = compute_hmac(HmacAlgorithm::Sha256, secret, &[value])?;
    Ok(hex::encode(hash))
}

/// Hex-encoded MD5 digest of the given string.
pub fn md5_hex(value: &str) -> String {
    hex::encode(Md5::digest(value.as_bytes()))
}

/// Compares a clear-text password against a hex-encoded, salted MD5 digest.
///
/// Returns true iff `MD5(salt + password)` equals `expected`. Pass the empty
/// string as `salt` when no salt is in use. A non-hex `expected` yields
/// false, never an error.
pub fn compare_passwords_md5(salt: &str, password: &str, expected: &str) -> bool {
    let mut digest = Md5::new();
    digest.update(salt.as_bytes());
    digest.update(password.as_bytes());
    check_hash(digest.finalize().as_slice(), expected)
}

/// Checks a computed digest against a hex-encoded expected value.
///
/// Decode failure of `expected` is treated as "not equal", not as an error.
pub fn check_hash(hash: &[u8], expected: &str) -> bool {
    match hex::decode(expected) {
        Ok(raw) => hash == raw.as_slice(),
        Err(_) => false,
    }
}

/// Generates a fresh random key for AES-128, hex encoded (32 characters,
/// uppercase base16 for parity with keys issued historically).
pub fn generate_aes128_key() -> String {
    let mut key = [0u8; AES_KEY_LEN_BYTES];
    rand::rng().fill_bytes(&mut key);
    hex::encode_upper(key)
}

/// Generates a fresh random key for AES-256, hex encoded (64 characters).
/// The AES codec itself stays 128-bit; this exists for deployments whose
/// runtime guarantees 256-bit support.
pub fn generate_aes256_key() -> String {
    let mut key = [0u8; 2 * AES_KEY_LEN_BYTES];
    rand::rng().fill_bytes(&mut key);
    hex::encode_upper(key)
}
