//! Known-answer fixture for the HKDF-SHA-256 self-test
//!
//! Test case 1 from RFC 5869, covering both the extract and the expand
//! step. The intermediate pseudorandom key is kept so each step can be
//! checked on its own.

/// Input keying material, 22 bytes of repeated `0x0b`
pub const HKDF_SHA256_IKM: [u8; 22] = [
    0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b,
    0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b,
    0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b,
];

/// Salt input to the extract step
pub const HKDF_SHA256_SALT: [u8; 13] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0a, 0x0b, 0x0c,
];

/// Application-specific info input to the expand step
pub const HKDF_SHA256_INFO: [u8; 10] = [
    0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7,
    0xf8, 0xf9,
];

/// Expected pseudorandom key out of the extract step
pub const HKDF_SHA256_PRK: [u8; 32] = [
    0x07, 0x77, 0x09, 0x36, 0x2c, 0x2e, 0x32, 0xdf,
    0x0d, 0xdc, 0x3f, 0x0d, 0xc4, 0x7b, 0xba, 0x63,
    0x90, 0xb6, 0xc7, 0x3b, 0xb5, 0x0f, 0x9c, 0x31,
    0x22, 0xec, 0x84, 0x4a, 0xd7, 0xc2, 0xb3, 0xe5,
];

/// Expected 42-byte output keying material
pub const HKDF_SHA256_OKM: [u8; 42] = [
    0x3c, 0xb2, 0x5f, 0x25, 0xfa, 0xac, 0xd5, 0x7a,
    0x90, 0x43, 0x4f, 0x64, 0xd0, 0x36, 0x2f, 0x2a,
    0x2d, 0x2d, 0x0a, 0x90, 0xcf, 0x1a, 0x5a, 0x4c,
    0x5d, 0xb0, 0x2d, 0x56, 0xec, 0xc4, 0xc5, 0xbf,
    0x34, 0x00, 0x72, 0x08, 0xd5, 0xb8, 0x87, 0x18,
    0x58, 0x65,
];

/// Inputs and expected answers for the KDF known-answer test
pub struct KdfFixture {
    /// Input keying material
    pub ikm: &'static [u8],

    /// Salt for the extract step
    pub salt: &'static [u8],

    /// Info for the expand step
    pub info: &'static [u8],

    /// Expected pseudorandom key from the extract step
    pub prk: &'static [u8],

    /// Expected output keying material from the expand step
    pub okm: &'static [u8],
}

/// HKDF-SHA-256 fixture
pub const HKDF_SHA256: KdfFixture = KdfFixture {
    ikm: &HKDF_SHA256_IKM,
    salt: &HKDF_SHA256_SALT,
    info: &HKDF_SHA256_INFO,
    prk: &HKDF_SHA256_PRK,
    okm: &HKDF_SHA256_OKM,
};
