// src/pii.rs
//! PII wrapper value type
//!
//! A [`PiiString`] is a string that contains PII. When PII encryption is
//! enabled, the persisted form is cipher text (as stored in the database) and
//! the clear text is derived lazily when something actually needs it (e.g.
//! output to a client). With the passthrough codec the two forms coincide.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use crate::codec::PiiCodec;
use crate::error::{CryptoError, Result};

/// Immutable PII value. Holds exactly one persisted representation plus a
/// lazily memoized clear-text cache.
///
/// Equality and hashing are defined over the persisted form only; two
/// wrappers are equal iff their stored representations are equal.
pub struct PiiString {
    value: String,
    codec: PiiCodec,
    // Memoized clear text. Concurrent first access can race, but the value
    // is idempotently derivable, so the first writer winning is harmless.
    clear_text: OnceLock<String>,
}

impl PiiString {
    /// Wraps a clear-text value, encrypting it immediately through the given
    /// codec. An absent input produces an absent result. The supplied clear
    /// text also seeds the cache, so no redundant decrypt happens later.
    pub fn from_clear_text(codec: &PiiCodec, value: Option<&str>) -> Result<Option<Self>> {
        let Some(clear) = value else {
            return Ok(None);
        };

        let cipher = codec.encrypt(clear)?;
        let pii = Self {
            value: cipher,
            codec: codec.clone(),
            clear_text: OnceLock::new(),
        };
        let _ = pii.clear_text.set(clear.to_string());
        Ok(Some(pii))
    }

    /// Wraps a value that must already be cipher text. Fails with
    /// [`CryptoError::Validation`] when the active codec rejects it.
    pub fn new(codec: &PiiCodec, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        codec
            .assert_cipher_text(&value)
            .map_err(|e| CryptoError::Validation(e.to_string()))?;
        Ok(Self::new_unchecked(codec, value))
    }

    /// Wraps a value without checking that it is cipher text. Use only for
    /// values already known to be valid, e.g. round-tripped from storage or
    /// rebuilt from another [`PiiString`].
    pub fn new_unchecked(codec: &PiiCodec, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            codec: codec.clone(),
            clear_text: OnceLock::new(),
        }
    }

    /// The persisted (possibly encrypted) form. Never triggers decryption.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The clear-text form, decrypted on first call and memoized for the
    /// life of the instance.
    pub fn clear_text(&self) -> Result<&str> {
        if let Some(clear) = self.clear_text.get() {
            return Ok(clear);
        }
        let clear = self.codec.decrypt(&self.value)?;
        Ok(self.clear_text.get_or_init(|| clear))
    }
}

impl Clone for PiiString {
    fn clone(&self) -> Self {
        let cloned = Self {
            value: self.value.clone(),
            codec: self.codec.clone(),
            clear_text: OnceLock::new(),
        };
        if let Some(clear) = self.clear_text.get() {
            let _ = cloned.clear_text.set(clear.clone());
        }
        cloned
    }
}

impl PartialEq for PiiString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PiiString {}

impl Hash for PiiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// The derived clear text never appears in debug output.
impl fmt::Debug for PiiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PiiString")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Serializes the persisted form only; the clear-text cache is transient.
/// There is no `Deserialize` — stored values re-enter through
/// [`PiiString::new_unchecked`] with the active codec in hand.
impl Serialize for PiiString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
