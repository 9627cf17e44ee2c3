//! Known-answer fixtures for the NIST P-256 ECDSA self-test
//!
//! Deterministic nonce generation per RFC 6979 makes the signature
//! reproducible, so a fixed expected answer exists. These are the
//! SHA-256 / "sample" vectors from RFC 6979 appendix A.2.5.

/// Private scalar `d`, big-endian
pub const P256_PRIVATE_SCALAR: [u8; 32] = [
    0xc9, 0xaf, 0xa9, 0xd8, 0x45, 0xba, 0x75, 0x16,
    0x6b, 0x5c, 0x21, 0x57, 0x67, 0xb1, 0xd6, 0x93,
    0x4e, 0x50, 0xc3, 0xdb, 0x36, 0xe8, 0x9b, 0x12,
    0x7b, 0x8a, 0x62, 0x2b, 0x12, 0x0f, 0x67, 0x21,
];

/// x coordinate of the public point `dG`
pub const P256_PUBLIC_X: [u8; 32] = [
    0x60, 0xfe, 0xd4, 0xba, 0x25, 0x5a, 0x9d, 0x31,
    0xc9, 0x61, 0xeb, 0x74, 0xc6, 0x35, 0x6d, 0x68,
    0xc0, 0x49, 0xb8, 0x92, 0x3b, 0x61, 0xfa, 0x6c,
    0xe6, 0x69, 0x62, 0x2e, 0x60, 0xf2, 0x9f, 0xb6,
];

/// y coordinate of the public point `dG`
pub const P256_PUBLIC_Y: [u8; 32] = [
    0x79, 0x03, 0xfe, 0x10, 0x08, 0xb8, 0xbc, 0x99,
    0xa4, 0x1a, 0xe9, 0xe9, 0x56, 0x28, 0xbc, 0x64,
    0xf2, 0xf1, 0xb2, 0x0c, 0x2d, 0x7e, 0x9f, 0x51,
    0x77, 0xa3, 0xc2, 0x94, 0xd4, 0x46, 0x22, 0x99,
];

/// Raw message, the ASCII string "sample"
pub const P256_MESSAGE: [u8; 6] = [
    0x73, 0x61, 0x6d, 0x70, 0x6c, 0x65,
];

/// SHA-256 digest of [`P256_MESSAGE`], as handed to the signer
pub const P256_MESSAGE_HASH: [u8; 32] = [
    0xaf, 0x2b, 0xdb, 0xe1, 0xaa, 0x9b, 0x6e, 0xc1,
    0xe2, 0xad, 0xe1, 0xd6, 0x94, 0xf4, 0x1f, 0xc7,
    0x1a, 0x83, 0x1d, 0x02, 0x68, 0xe9, 0x89, 0x15,
    0x62, 0x11, 0x3d, 0x8a, 0x62, 0xad, 0xd1, 0xbf,
];

/// Expected deterministic signature, fixed-width `r || s`
pub const P256_SHA256_SIGNATURE: [u8; 64] = [
    0xef, 0xd4, 0x8b, 0x2a, 0xac, 0xb6, 0xa8, 0xfd,
    0x11, 0x40, 0xdd, 0x9c, 0xd4, 0x5e, 0x81, 0xd6,
    0x9d, 0x2c, 0x87, 0x7b, 0x56, 0xaa, 0xf9, 0x91,
    0xc3, 0x4d, 0x0e, 0xa8, 0x4e, 0xaf, 0x37, 0x16,
    0xf7, 0xcb, 0x1c, 0x94, 0x2d, 0x65, 0x7c, 0x41,
    0xd4, 0x36, 0xc7, 0xa1, 0xb6, 0xe2, 0x9f, 0x65,
    0xf3, 0xe9, 0x00, 0xdb, 0xb9, 0xaf, 0xf4, 0x06,
    0x4d, 0xc4, 0xab, 0x2f, 0x84, 0x3a, 0xcd, 0xa8,
];

/// Inputs and expected answer for the ECDSA known-answer test
pub struct EcdsaFixture {
    /// Private scalar `d`, big-endian
    pub private_scalar: &'static [u8],

    /// Public point x coordinate, big-endian
    pub public_x: &'static [u8],

    /// Public point y coordinate, big-endian
    pub public_y: &'static [u8],

    /// Raw message
    pub message: &'static [u8],

    /// SHA-256 digest of [`Self::message`], as handed to the signer
    pub message_hash: &'static [u8],

    /// Expected signature, fixed-width `r || s`
    pub signature: &'static [u8],
}

/// P-256 fixture signing a SHA-256 digest
pub const ECDSA_P256_SHA256: EcdsaFixture = EcdsaFixture {
    private_scalar: &P256_PRIVATE_SCALAR,
    public_x: &P256_PUBLIC_X,
    public_y: &P256_PUBLIC_Y,
    message: &P256_MESSAGE,
    message_hash: &P256_MESSAGE_HASH,
    signature: &P256_SHA256_SIGNATURE,
};
