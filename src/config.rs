// src/config.rs
//! Resolved configuration and typed lookups
//!
//! The surrounding application merges its properties files and environment
//! overrides elsewhere; this module only models the already-resolved flat
//! key→value map and the required-vs-defaulted lookup semantics the crypto
//! layer depends on.

use std::collections::BTreeMap;
use std::path::Path;

use crate::codec::{select_pii_codec, PiiCodec};
use crate::consts::{
    APP_SECRET_KEY, CHARACTER_ENCODING_KEY, DEFAULT_CHARACTER_ENCODING, PII_SECRET_KEY,
};
use crate::error::{CryptoError, Result};

/// Flat string key→value configuration, merged from defaults plus
/// environment-specific overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigMap {
    values: BTreeMap<String, String>,
}

impl ConfigMap {
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Parse a flat TOML document of string values, e.g.
    ///
    /// ```toml
    /// "crypto.app.secret" = "app-secret"
    /// "crypto.pii.secret" = "00000000000000000000000000000000"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let values: BTreeMap<String, String> = toml::from_str(content)
            .map_err(|e| CryptoError::Configuration(format!("invalid config TOML: {e}")))?;
        Ok(Self { values })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CryptoError::Configuration(format!(
                "unable to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Layer environment-specific values on top of this map. Keys in
    /// `overrides` win.
    pub fn merge(mut self, overrides: ConfigMap) -> Self {
        self.values.extend(overrides.values);
        self
    }

    /// Look up a key that must be present and non-empty. Missing keys are a
    /// fatal startup condition for callers.
    pub fn get_required(&self, key: &str) -> Result<&str> {
        match self.values.get(key) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(CryptoError::Configuration(format!(
                "missing required config key: {key}"
            ))),
        }
    }

    /// Look up a key, falling back to `default` when absent or empty.
    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.values.get(key) {
            Some(v) if !v.is_empty() => v,
            _ => default,
        }
    }
}

/// Immutable, process-lifetime view of the crypto configuration, resolved
/// once at startup.
#[derive(Debug, Clone)]
pub struct CryptoConfig {
    /// Secret used by the HMAC signing helpers. Required.
    pub app_secret: String,
    /// Secret parameterizing the PII codec. `None` disables encryption.
    pub pii_secret: Option<String>,
    /// Character encoding for string↔byte conversion. Only UTF-8 is
    /// supported; the key exists so a misconfigured deployment fails loudly
    /// instead of silently mangling stored values.
    pub character_encoding: String,
}

impl CryptoConfig {
    pub fn resolve(config: &ConfigMap) -> Result<Self> {
        let app_secret = config.get_required(APP_SECRET_KEY)?.to_string();

        let pii_secret = match config.get_or_default(PII_SECRET_KEY, "") {
            "" => None,
            secret => Some(secret.to_string()),
        };

        let character_encoding = config
            .get_or_default(CHARACTER_ENCODING_KEY, DEFAULT_CHARACTER_ENCODING)
            .to_string();
        if !character_encoding.eq_ignore_ascii_case(DEFAULT_CHARACTER_ENCODING) {
            return Err(CryptoError::Configuration(format!(
                "unsupported character encoding {character_encoding}: only UTF-8 is supported"
            )));
        }

        Ok(Self {
            app_secret,
            pii_secret,
            character_encoding,
        })
    }

    /// One-time codec selection: AES when a PII secret is configured,
    /// passthrough otherwise. Callers hold the returned handle and pass it
    /// down explicitly; there is no global codec singleton.
    pub fn pii_codec(&self) -> Result<PiiCodec> {
        select_pii_codec(self.pii_secret.as_deref())
    }
}
