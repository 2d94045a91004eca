// src/consts.rs
//! Shared constants — key sizes and configuration key names

/// AES password keys must be exactly 32 hex characters: 128-bit AES is the
/// lowest common denominator guaranteed across target platforms.
pub const AES_KEY_LEN_HEX: usize = 32;

/// Raw byte length of a decoded 128-bit AES key
pub const AES_KEY_LEN_BYTES: usize = 16;

/// Config key for the application signing secret (required)
pub const APP_SECRET_KEY: &str = "crypto.app.secret";

/// Config key for the optional PII secret; absent or empty means the
/// passthrough codec is wired instead of AES
pub const PII_SECRET_KEY: &str = "crypto.pii.secret";

/// Config key for the application character encoding
pub const CHARACTER_ENCODING_KEY: &str = "app.character.encoding";

/// Default character encoding
pub const DEFAULT_CHARACTER_ENCODING: &str = "UTF-8";
