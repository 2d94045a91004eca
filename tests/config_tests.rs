// tests/config_tests.rs
use std::collections::BTreeMap;
use std::io::Write;

use pii_codec::{ConfigMap, CryptoConfig, CryptoError, EncryptionCodec};

mod common;

const KEY: &str = "00000000000000000000000000000000";

fn map(entries: &[(&str, &str)]) -> ConfigMap {
    ConfigMap::new(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[test]
fn required_lookup_fails_when_absent() {
    common::setup();
    let config = map(&[]);
    assert!(matches!(
        config.get_required("crypto.app.secret"),
        Err(CryptoError::Configuration(_))
    ));
}

#[test]
fn required_lookup_fails_when_empty() {
    let config = map(&[("crypto.app.secret", "")]);
    assert!(config.get_required("crypto.app.secret").is_err());
}

#[test]
fn defaulted_lookup_falls_back_on_absent_or_empty() {
    let config = map(&[("present", "value"), ("empty", "")]);
    assert_eq!(config.get_or_default("present", "fallback"), "value");
    assert_eq!(config.get_or_default("empty", "fallback"), "fallback");
    assert_eq!(config.get_or_default("missing", "fallback"), "fallback");
}

#[test]
fn overrides_win_on_merge() {
    let defaults = map(&[("a", "default"), ("b", "default")]);
    let overrides = map(&[("b", "override")]);
    let merged = defaults.merge(overrides);

    assert_eq!(merged.get_or_default("a", ""), "default");
    assert_eq!(merged.get_or_default("b", ""), "override");
}

#[test]
fn parses_flat_toml() {
    let config = ConfigMap::from_toml_str(
        r#"
"crypto.app.secret" = "app-secret"
"crypto.pii.secret" = "00000000000000000000000000000000"
"#,
    )
    .unwrap();

    assert_eq!(config.get_required("crypto.app.secret").unwrap(), "app-secret");
}

#[test]
fn rejects_malformed_toml() {
    let result = ConfigMap::from_toml_str("this is not toml = = =");
    assert!(matches!(result, Err(CryptoError::Configuration(_))));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\"crypto.app.secret\" = \"app-secret\"").unwrap();

    let config = ConfigMap::load(file.path()).unwrap();
    assert_eq!(config.get_required("crypto.app.secret").unwrap(), "app-secret");
}

#[test]
fn load_fails_for_missing_file() {
    assert!(matches!(
        ConfigMap::load("/definitely/not/here.toml"),
        Err(CryptoError::Configuration(_))
    ));
}

#[test]
fn resolve_requires_the_app_secret() {
    let result = CryptoConfig::resolve(&map(&[]));
    assert!(matches!(result, Err(CryptoError::Configuration(_))));
}

#[test]
fn resolve_defaults_the_optional_fields() {
    let resolved = CryptoConfig::resolve(&map(&[("crypto.app.secret", "app-secret")])).unwrap();

    assert_eq!(resolved.app_secret, "app-secret");
    assert_eq!(resolved.pii_secret, None);
    assert_eq!(resolved.character_encoding, "UTF-8");
}

#[test]
fn empty_pii_secret_means_no_encryption() {
    let resolved = CryptoConfig::resolve(&map(&[
        ("crypto.app.secret", "app-secret"),
        ("crypto.pii.secret", ""),
    ]))
    .unwrap();
    assert_eq!(resolved.pii_secret, None);

    let codec = resolved.pii_codec().unwrap();
    assert_eq!(codec.encrypt("clear").unwrap(), "clear");
}

#[test]
fn present_pii_secret_wires_the_aes_codec() {
    let resolved = CryptoConfig::resolve(&map(&[
        ("crypto.app.secret", "app-secret"),
        ("crypto.pii.secret", KEY),
    ]))
    .unwrap();

    let codec = resolved.pii_codec().unwrap();
    let cipher = codec.encrypt("clear").unwrap();
    assert_ne!(cipher, "clear");
    assert_eq!(codec.decrypt(&cipher).unwrap(), "clear");
}

#[test]
fn malformed_pii_secret_is_a_key_format_error() {
    let resolved = CryptoConfig::resolve(&map(&[
        ("crypto.app.secret", "app-secret"),
        ("crypto.pii.secret", "too short"),
    ]))
    .unwrap();

    assert!(matches!(
        resolved.pii_codec(),
        Err(CryptoError::KeyFormat(_))
    ));
}

#[test]
fn unsupported_encoding_is_rejected() {
    let result = CryptoConfig::resolve(&map(&[
        ("crypto.app.secret", "app-secret"),
        ("app.character.encoding", "ISO-8859-1"),
    ]));
    assert!(matches!(result, Err(CryptoError::Configuration(_))));
}
