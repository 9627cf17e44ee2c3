//! Known-answer fixture for the HMAC-SHA-256 self-test
//!
//! Test case 1 from RFC 4231.

/// 20-byte key of repeated `0x0b`
pub const HMAC_SHA256_KEY: [u8; 20] = [
    0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b,
    0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b, 0x0b,
    0x0b, 0x0b, 0x0b, 0x0b,
];

/// Message input, the ASCII string "Hi There"
pub const HMAC_SHA256_MESSAGE: [u8; 8] = [
    0x48, 0x69, 0x20, 0x54, 0x68, 0x65, 0x72, 0x65,
];

/// Expected HMAC-SHA-256 output
pub const HMAC_SHA256_MAC: [u8; 32] = [
    0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53,
    0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b, 0xf1, 0x2b,
    0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7,
    0x26, 0xe9, 0x37, 0x6c, 0x2e, 0x32, 0xcf, 0xf7,
];

/// Inputs and expected answer for the MAC known-answer test
pub struct MacFixture {
    /// MAC key
    pub key: &'static [u8],

    /// Message input
    pub message: &'static [u8],

    /// Expected MAC value
    pub mac: &'static [u8],
}

/// HMAC-SHA-256 fixture
pub const HMAC_SHA256: MacFixture = MacFixture {
    key: &HMAC_SHA256_KEY,
    message: &HMAC_SHA256_MESSAGE,
    mac: &HMAC_SHA256_MAC,
};
