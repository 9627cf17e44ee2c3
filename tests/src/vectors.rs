//! Published answers, transcribed independently of the fixtures
//!
//! `fipsgate-params` compiles in the answers the engine trusts. The hex
//! strings here are a second transcription straight from the published
//! sources, and [`verify_against_params`] cross-checks the two, so a
//! corrupted fixture fails loudly instead of letting the engine agree
//! with itself. Only the externally standardized vectors appear here;
//! the RSA fixtures use a fixed test key with no published answer.

use once_cell::sync::Lazy;

use crate::error::HarnessError;

/// SHA-256 digest of "abc" from the FIPS 180 examples.
pub const SHA256_DIGEST_HEX: &str =
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// HMAC-SHA-256 output for RFC 4231 test case 1.
pub const HMAC_SHA256_MAC_HEX: &str =
    "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7";

/// HKDF-SHA-256 pseudorandom key for RFC 5869 test case 1.
pub const HKDF_SHA256_PRK_HEX: &str =
    "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5";

/// HKDF-SHA-256 output keying material for RFC 5869 test case 1.
pub const HKDF_SHA256_OKM_HEX: &str =
    "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865";

/// AES-256-GCM ciphertext for GCM validation test case 16.
pub const AES_256_GCM_CIPHERTEXT_HEX: &str =
    "522dc1f099567d07f47f37a32a84427d643a8cdcbfe5c0c97598a2bd2555d1aa8cb08e48590dbb3da7b08b1056828838c5f61e6393ba7a0abcc9f662";

/// AES-256-GCM authentication tag for GCM validation test case 16.
pub const AES_256_GCM_TAG_HEX: &str = "76fc6ece0f4e1768cddf8853bb2d551b";

/// Deterministic ECDSA P-256 signature for RFC 6979 A.2.5 with SHA-256,
/// fixed-width `r || s`.
pub const ECDSA_P256_SIGNATURE_HEX: &str =
    "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";

/// Published answers decoded once on first use.
pub static PUBLISHED: Lazy<PublishedAnswers> =
    Lazy::new(|| PublishedAnswers::decode().expect("published vector literals decode"));

/// Decoded published answers for the externally standardized fixtures.
pub struct PublishedAnswers {
    /// FIPS 180 "abc" digest
    pub sha256_digest: Vec<u8>,
    /// RFC 4231 test case 1 MAC
    pub hmac_sha256_mac: Vec<u8>,
    /// RFC 5869 test case 1 PRK
    pub hkdf_sha256_prk: Vec<u8>,
    /// RFC 5869 test case 1 OKM
    pub hkdf_sha256_okm: Vec<u8>,
    /// GCM test case 16 ciphertext
    pub aes_256_gcm_ciphertext: Vec<u8>,
    /// GCM test case 16 tag
    pub aes_256_gcm_tag: Vec<u8>,
    /// RFC 6979 A.2.5 signature
    pub ecdsa_p256_signature: Vec<u8>,
}

impl PublishedAnswers {
    fn decode() -> Result<Self, HarnessError> {
        Ok(Self {
            sha256_digest: decode("sha256 digest", SHA256_DIGEST_HEX)?,
            hmac_sha256_mac: decode("hmac mac", HMAC_SHA256_MAC_HEX)?,
            hkdf_sha256_prk: decode("hkdf prk", HKDF_SHA256_PRK_HEX)?,
            hkdf_sha256_okm: decode("hkdf okm", HKDF_SHA256_OKM_HEX)?,
            aes_256_gcm_ciphertext: decode("gcm ciphertext", AES_256_GCM_CIPHERTEXT_HEX)?,
            aes_256_gcm_tag: decode("gcm tag", AES_256_GCM_TAG_HEX)?,
            ecdsa_p256_signature: decode("ecdsa signature", ECDSA_P256_SIGNATURE_HEX)?,
        })
    }
}

/// Decode one named hex vector.
pub fn decode(name: &'static str, hex_text: &str) -> Result<Vec<u8>, HarnessError> {
    hex::decode(hex_text).map_err(|source| HarnessError::Hex { name, source })
}

/// Cross-check the compiled-in fixtures against the published answers.
pub fn verify_against_params() -> Result<(), HarnessError> {
    let published = &*PUBLISHED;
    check(
        "sha256 digest",
        &published.sha256_digest,
        fipsgate_params::hash::SHA256.digest,
    )?;
    check(
        "hmac mac",
        &published.hmac_sha256_mac,
        fipsgate_params::mac::HMAC_SHA256.mac,
    )?;
    check(
        "hkdf prk",
        &published.hkdf_sha256_prk,
        fipsgate_params::kdf::HKDF_SHA256.prk,
    )?;
    check(
        "hkdf okm",
        &published.hkdf_sha256_okm,
        fipsgate_params::kdf::HKDF_SHA256.okm,
    )?;
    check(
        "gcm ciphertext",
        &published.aes_256_gcm_ciphertext,
        fipsgate_params::aead::AES_256_GCM.ciphertext,
    )?;
    check(
        "gcm tag",
        &published.aes_256_gcm_tag,
        fipsgate_params::aead::AES_256_GCM.tag,
    )?;
    check(
        "ecdsa signature",
        &published.ecdsa_p256_signature,
        fipsgate_params::ecdsa::ECDSA_P256_SHA256.signature,
    )?;
    Ok(())
}

fn check(name: &'static str, published: &[u8], fixture: &[u8]) -> Result<(), HarnessError> {
    if published == fixture {
        Ok(())
    } else {
        Err(HarnessError::FixtureMismatch { name })
    }
}
