// tests/codec_variants_tests.rs
use pii_codec::{CryptoError, EncryptionCodec, Md5Codec, PassthroughCodec};

mod common;

/// Well-known MD5 digest of the empty string.
const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

#[test]
fn md5_encrypt_matches_known_vector() {
    common::setup();
    let codec = Md5Codec;
    assert_eq!(codec.encrypt("").unwrap(), EMPTY_MD5);
}

#[test]
fn md5_encrypt_is_deterministic() {
    let codec = Md5Codec;
    assert_eq!(
        codec.encrypt("some pii").unwrap(),
        codec.encrypt("some pii").unwrap()
    );
}

#[test]
fn md5_is_one_way() {
    let codec = Md5Codec;
    let cipher = codec.encrypt("some pii").unwrap();

    assert!(matches!(
        codec.decrypt(&cipher),
        Err(CryptoError::Unsupported(_))
    ));
    assert!(matches!(
        codec.assert_cipher_text(&cipher),
        Err(CryptoError::Unsupported(_))
    ));
}

#[test]
fn md5_compare_re_hashes() {
    let codec = Md5Codec;
    let cipher = codec.encrypt("some pii").unwrap();

    assert!(codec.compare("some pii", &cipher).unwrap());
    assert!(!codec.compare("other pii", &cipher).unwrap());
}

#[test]
fn passthrough_is_the_identity() {
    let codec = PassthroughCodec;
    assert_eq!(codec.encrypt("anything").unwrap(), "anything");
    assert_eq!(codec.decrypt("anything").unwrap(), "anything");
}

#[test]
fn passthrough_compare_is_string_equality() {
    let codec = PassthroughCodec;
    assert!(codec.compare("a", "a").unwrap());
    assert!(!codec.compare("a", "b").unwrap());
}

#[test]
fn passthrough_accepts_any_cipher_text() {
    let codec = PassthroughCodec;
    codec.assert_cipher_text("clearly not encrypted").unwrap();
    codec.assert_cipher_text("").unwrap();
}
