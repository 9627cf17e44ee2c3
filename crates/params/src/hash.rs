//! Known-answer fixture for the SHA-256 self-test
//!
//! The single-block "abc" case from the FIPS 180 examples.

/// Message input, the ASCII string "abc"
pub const SHA256_MESSAGE: [u8; 3] = [
    0x61, 0x62, 0x63,
];

/// Expected SHA-256 digest of [`SHA256_MESSAGE`]
pub const SHA256_DIGEST: [u8; 32] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea,
    0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
    0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
    0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

/// Input and expected answer for the hash known-answer test
pub struct HashFixture {
    /// Message input
    pub message: &'static [u8],

    /// Expected digest
    pub digest: &'static [u8],
}

/// SHA-256 fixture
pub const SHA256: HashFixture = HashFixture {
    message: &SHA256_MESSAGE,
    digest: &SHA256_DIGEST,
};
