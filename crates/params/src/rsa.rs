//! Known-answer fixtures for the RSA self-tests
//!
//! The 2048-bit key below is fixed test-only material and must never be
//! used outside the self-tests. The signature fixture carries a
//! precomputed SHA-256 digest because the signing operation consumes a
//! digest, not a raw message. The raw fixture exercises modular
//! exponentiation in both directions without any padding.

/// 2048-bit modulus `n`, big-endian
pub const RSA_2048_MODULUS: [u8; 256] = [
    0xd2, 0x24, 0xb6, 0x24, 0x58, 0x15, 0x1f, 0xef,
    0x7c, 0x93, 0x50, 0x10, 0xe9, 0x3f, 0x01, 0x1a,
    0xd9, 0x2a, 0x2d, 0x16, 0x28, 0xfc, 0x27, 0xc1,
    0x66, 0x33, 0x12, 0xcc, 0x0e, 0x61, 0xf5, 0x90,
    0x46, 0x3a, 0x8f, 0x5d, 0x82, 0xdb, 0x99, 0x7f,
    0x41, 0xa1, 0x68, 0xaf, 0xb0, 0x15, 0xc4, 0xa5,
    0x2a, 0xf4, 0xd9, 0x49, 0x7f, 0x55, 0x57, 0x28,
    0xe5, 0xf8, 0xbe, 0xcf, 0xfd, 0x7e, 0x5c, 0x7e,
    0x5a, 0x6f, 0xcb, 0x8c, 0xe1, 0x3d, 0x7e, 0x9e,
    0x5d, 0x0f, 0x51, 0x97, 0x19, 0x37, 0x81, 0x39,
    0x11, 0xcb, 0xf9, 0x8c, 0x2f, 0x9a, 0x83, 0xb1,
    0xc9, 0x13, 0x08, 0x5e, 0x38, 0xc4, 0xef, 0x99,
    0xbd, 0xc9, 0xe4, 0x05, 0x04, 0xab, 0xfd, 0x9e,
    0xc2, 0x95, 0x29, 0xe9, 0x42, 0x8d, 0x3b, 0x06,
    0x63, 0x6e, 0xcb, 0x01, 0x7f, 0x9d, 0x10, 0x69,
    0xf8, 0x53, 0x64, 0x9a, 0x43, 0x54, 0x62, 0x0f,
    0x9a, 0x50, 0xcc, 0x2d, 0x32, 0xfb, 0x5c, 0x22,
    0x10, 0x98, 0xa7, 0x52, 0xdb, 0xf2, 0x3a, 0x43,
    0x68, 0x28, 0xce, 0x3d, 0x58, 0xc4, 0x8b, 0xd4,
    0x94, 0xd7, 0x85, 0xea, 0x4b, 0x01, 0xab, 0x12,
    0x7e, 0xc3, 0x04, 0x97, 0xfb, 0xf8, 0x73, 0x79,
    0x89, 0x49, 0xf4, 0x06, 0x67, 0x8e, 0x07, 0x4e,
    0x0d, 0x91, 0x19, 0x53, 0x55, 0x46, 0xd1, 0xf7,
    0x76, 0x18, 0xf7, 0x64, 0x36, 0x10, 0xdd, 0xa7,
    0xac, 0x00, 0xca, 0x10, 0x3d, 0x4e, 0x05, 0x6a,
    0x7d, 0x42, 0x89, 0xc4, 0x74, 0xf4, 0x93, 0x67,
    0x51, 0xe0, 0xc9, 0x76, 0x21, 0x2f, 0xc3, 0xb9,
    0x30, 0x28, 0x91, 0x76, 0x56, 0xbf, 0xd8, 0x2d,
    0xcf, 0x5b, 0xdc, 0x42, 0xf9, 0x1f, 0xf1, 0xa8,
    0xc9, 0x3a, 0x4b, 0x0f, 0xff, 0x7a, 0xa0, 0xf9,
    0xe8, 0x87, 0x98, 0x38, 0x30, 0xa8, 0x96, 0x45,
    0x28, 0x3a, 0x86, 0x28, 0x02, 0xa2, 0x96, 0xcf,
];

/// Public exponent `e` (65537), big-endian
pub const RSA_2048_PUBLIC_EXPONENT: [u8; 4] = [
    0x00, 0x01, 0x00, 0x01,
];

/// Private exponent `d`, big-endian
pub const RSA_2048_PRIVATE_EXPONENT: [u8; 256] = [
    0x57, 0x87, 0x04, 0xfa, 0x94, 0x59, 0x90, 0x28,
    0xaf, 0x09, 0xa8, 0xc2, 0xb2, 0x74, 0x14, 0xa0,
    0xbb, 0x2d, 0x4f, 0x04, 0x38, 0xe3, 0xf6, 0x27,
    0x1e, 0xcb, 0x4d, 0x1c, 0x03, 0x2d, 0x98, 0x1b,
    0x94, 0xb4, 0xd5, 0x7c, 0x0c, 0x82, 0x2d, 0x28,
    0x0d, 0x0d, 0x0e, 0xce, 0x86, 0x98, 0x3a, 0x84,
    0xd5, 0x24, 0x90, 0xd0, 0x85, 0x21, 0xe5, 0xa0,
    0xda, 0x50, 0xc6, 0x21, 0x59, 0xa3, 0x65, 0x21,
    0x17, 0xc8, 0x12, 0xcf, 0x46, 0x0d, 0xd8, 0x0c,
    0x5c, 0x14, 0x82, 0x56, 0x5e, 0x21, 0x79, 0x48,
    0x6c, 0xfa, 0x39, 0xa1, 0xc3, 0x3e, 0x27, 0x76,
    0x48, 0x9b, 0x0d, 0xd4, 0x38, 0xef, 0x06, 0x21,
    0x52, 0x24, 0xa2, 0x3d, 0xd8, 0xd9, 0x4e, 0x54,
    0xef, 0x15, 0x34, 0x14, 0xbd, 0x2c, 0x98, 0x16,
    0x2c, 0x1a, 0x3c, 0xa2, 0x0e, 0x26, 0x3c, 0x6c,
    0xf7, 0x0a, 0xbd, 0x0f, 0x67, 0xd5, 0xe0, 0xd5,
    0x7f, 0x90, 0x82, 0x49, 0xa7, 0x0f, 0xe8, 0x77,
    0xe3, 0x67, 0x39, 0xfe, 0x1f, 0x5f, 0x70, 0xa8,
    0x47, 0x77, 0x3a, 0x9a, 0xda, 0xc1, 0x63, 0x7a,
    0x5f, 0x98, 0xbc, 0x2a, 0x55, 0xee, 0xfc, 0x7c,
    0xe0, 0xf6, 0x0b, 0xe0, 0xe5, 0x77, 0x8c, 0x1f,
    0x8e, 0x60, 0xc5, 0xc5, 0x24, 0xb7, 0x95, 0xff,
    0x5f, 0xb2, 0xda, 0xf8, 0xb8, 0x3a, 0xc2, 0x9e,
    0xe1, 0x68, 0x4f, 0x27, 0xde, 0x24, 0xbb, 0x92,
    0xb0, 0x6c, 0xf3, 0x4c, 0xbf, 0x6c, 0x74, 0x05,
    0x6f, 0xe9, 0x6c, 0x7a, 0x11, 0x3d, 0xb7, 0xe6,
    0xbc, 0xc9, 0x35, 0x4a, 0x5c, 0xc2, 0xd3, 0xf7,
    0x54, 0x94, 0xb2, 0x7c, 0x17, 0x01, 0xfa, 0x08,
    0xfc, 0xb3, 0xf5, 0x5b, 0xb2, 0xc0, 0x07, 0xdb,
    0x23, 0x6b, 0xac, 0xf9, 0x29, 0x8b, 0xe7, 0xa9,
    0x0f, 0x48, 0x7f, 0x1d, 0x6e, 0x76, 0x3c, 0x3b,
    0x62, 0xe9, 0xc1, 0xfd, 0xd4, 0xc0, 0x9d, 0xf9,
];

/// SHA-256 digest handed to the signer
pub const PKCS1_SHA256_MESSAGE_HASH: [u8; 32] = [
    0x19, 0x90, 0x2d, 0x02, 0x34, 0x6e, 0xd5, 0x90,
    0x0e, 0x69, 0x51, 0x2f, 0xf2, 0xbd, 0x9d, 0x33,
    0x26, 0x71, 0x8f, 0x62, 0xa0, 0x01, 0xbd, 0xfd,
    0x94, 0xe2, 0x98, 0x17, 0x24, 0xfd, 0xca, 0xf0,
];

/// Expected PKCS#1 v1.5 signature over [`PKCS1_SHA256_MESSAGE_HASH`]
pub const PKCS1_SHA256_SIGNATURE: [u8; 256] = [
    0x7b, 0x5c, 0x58, 0xd7, 0x81, 0xfc, 0xbb, 0x82,
    0x65, 0x1f, 0x17, 0xe2, 0x29, 0x75, 0x2a, 0x20,
    0xe3, 0xa0, 0x46, 0x3b, 0xd0, 0xd2, 0x10, 0x9a,
    0x09, 0x85, 0xe1, 0x4b, 0x68, 0x11, 0x64, 0xc9,
    0x44, 0xf4, 0x42, 0x11, 0x31, 0xbe, 0x02, 0xd4,
    0x2e, 0xe2, 0x8c, 0xb7, 0x33, 0xb9, 0xec, 0x0f,
    0xac, 0xad, 0x07, 0x74, 0xd7, 0xc4, 0xe7, 0x32,
    0xae, 0xd0, 0x01, 0xbe, 0x14, 0x5f, 0x40, 0x54,
    0x48, 0x4c, 0x24, 0x69, 0x39, 0x6b, 0x43, 0x3d,
    0xe3, 0xde, 0x06, 0x57, 0x13, 0xa9, 0x43, 0xef,
    0x4e, 0x75, 0x95, 0x5c, 0x77, 0x3e, 0xe1, 0x76,
    0x0c, 0xff, 0x51, 0x49, 0xa6, 0x62, 0x2a, 0x82,
    0x01, 0x76, 0xec, 0x2c, 0xcd, 0x48, 0x0d, 0x2e,
    0x6b, 0xdd, 0x8a, 0xd0, 0x2d, 0xaf, 0x3d, 0x5a,
    0xee, 0xc4, 0x6a, 0xdd, 0x04, 0x47, 0xb1, 0x5e,
    0xd0, 0x90, 0xee, 0xa6, 0xe7, 0x0f, 0x99, 0xb2,
    0x4e, 0xe4, 0xee, 0x30, 0x9e, 0xb2, 0x5e, 0xb9,
    0x7c, 0x75, 0xe1, 0xba, 0x60, 0x49, 0x94, 0x9b,
    0xd6, 0xa7, 0xe1, 0x9e, 0x24, 0xbc, 0x9e, 0x37,
    0xcf, 0x07, 0xea, 0xa8, 0xaf, 0xcc, 0xee, 0xf1,
    0x22, 0x2a, 0xdb, 0x3d, 0x4f, 0x29, 0xf4, 0x48,
    0x49, 0x56, 0xb4, 0xc6, 0x89, 0x3b, 0x7e, 0xd7,
    0x08, 0x7c, 0x2a, 0xb4, 0xcc, 0x6e, 0x4c, 0x12,
    0x6f, 0xbc, 0xac, 0xfb, 0xb0, 0xe5, 0xf7, 0xc7,
    0x57, 0xb3, 0x84, 0xa6, 0xb9, 0x2f, 0x59, 0xea,
    0xaa, 0xf0, 0x9a, 0xe7, 0xff, 0xbc, 0xf8, 0x12,
    0x09, 0x6e, 0x2b, 0xf8, 0x24, 0xc0, 0x45, 0xb4,
    0x0c, 0x23, 0x05, 0x7d, 0xf5, 0xc6, 0x8a, 0x19,
    0x30, 0x8a, 0x40, 0x5a, 0xc6, 0xbd, 0x66, 0xd5,
    0xdf, 0xc1, 0xbb, 0x8f, 0x26, 0x2d, 0xd1, 0xaf,
    0x46, 0x47, 0xef, 0x2b, 0x3d, 0x73, 0xd5, 0xcb,
    0x4a, 0xda, 0xf8, 0x0e, 0xf6, 0xdf, 0x5e, 0x7b,
];

/// Plaintext block for the raw encryption fixture, numerically below `n`
pub const RAW_PLAINTEXT: [u8; 256] = [
    0x00, 0x8c, 0x64, 0x37, 0x17, 0x78, 0xc0, 0xd8,
    0x20, 0xbe, 0x6a, 0xad, 0xc5, 0x1e, 0x73, 0x8a,
    0x6f, 0x43, 0x59, 0xc0, 0x73, 0x9f, 0x15, 0x1d,
    0x62, 0x42, 0x07, 0x0c, 0xf1, 0xf2, 0xb5, 0x26,
    0x0c, 0x9b, 0x0a, 0xf6, 0x3f, 0x59, 0x59, 0xa7,
    0x8e, 0x41, 0x0a, 0xb8, 0x85, 0x59, 0x81, 0xc5,
    0x88, 0x4d, 0xd7, 0x6f, 0x3e, 0xad, 0x23, 0x5d,
    0x4e, 0x9a, 0xd6, 0x14, 0xfa, 0x36, 0x86, 0x71,
    0x31, 0xbd, 0xe9, 0x40, 0x91, 0xd6, 0x94, 0x6e,
    0x72, 0x1c, 0xb9, 0x9c, 0x2b, 0xfe, 0x5b, 0x89,
    0xfb, 0x7a, 0xef, 0xf4, 0x60, 0x4b, 0x64, 0x87,
    0x70, 0xd0, 0xba, 0xc4, 0x6b, 0x98, 0x35, 0x81,
    0x9b, 0xf9, 0x92, 0x3a, 0x04, 0x5a, 0x00, 0xb6,
    0x9b, 0xe8, 0xbd, 0xfa, 0xeb, 0x54, 0xc0, 0x9e,
    0x81, 0xd2, 0x0a, 0xb7, 0xf4, 0x86, 0x21, 0x41,
    0x8f, 0x58, 0x64, 0x35, 0xf6, 0x47, 0x38, 0x77,
    0x36, 0x8c, 0x64, 0x37, 0x17, 0x78, 0xc0, 0xd8,
    0x20, 0xbe, 0x6a, 0xad, 0xc5, 0x1e, 0x73, 0x8a,
    0x6f, 0x43, 0x59, 0xc0, 0x73, 0x9f, 0x15, 0x1d,
    0x62, 0x42, 0x07, 0x0c, 0xf1, 0xf2, 0xb5, 0x26,
    0x0c, 0x9b, 0x0a, 0xf6, 0x3f, 0x59, 0x59, 0xa7,
    0x8e, 0x41, 0x0a, 0xb8, 0x85, 0x59, 0x81, 0xc5,
    0x88, 0x4d, 0xd7, 0x6f, 0x3e, 0xad, 0x23, 0x5d,
    0x4e, 0x9a, 0xd6, 0x14, 0xfa, 0x36, 0x86, 0x71,
    0x31, 0xbd, 0xe9, 0x40, 0x91, 0xd6, 0x94, 0x6e,
    0x72, 0x1c, 0xb9, 0x9c, 0x2b, 0xfe, 0x5b, 0x89,
    0xfb, 0x7a, 0xef, 0xf4, 0x60, 0x4b, 0x64, 0x87,
    0x70, 0xd0, 0xba, 0xc4, 0x6b, 0x98, 0x35, 0x81,
    0x9b, 0xf9, 0x92, 0x3a, 0x04, 0x5a, 0x00, 0xb6,
    0x9b, 0xe8, 0xbd, 0xfa, 0xeb, 0x54, 0xc0, 0x9e,
    0x81, 0xd2, 0x0a, 0xb7, 0xf4, 0x86, 0x21, 0x41,
    0x8f, 0x58, 0x64, 0x35, 0xf6, 0x47, 0x38, 0x77,
];

/// Expected raw encryption of [`RAW_PLAINTEXT`]
pub const RAW_CIPHERTEXT: [u8; 256] = [
    0x49, 0x71, 0xa8, 0x77, 0xd3, 0xd3, 0x50, 0x4a,
    0x6d, 0x9e, 0x9c, 0x88, 0x7c, 0xc5, 0x48, 0xad,
    0x5e, 0xa1, 0x71, 0xbc, 0xa0, 0x19, 0xc2, 0x16,
    0x50, 0x5f, 0x0d, 0x54, 0x8d, 0x52, 0x2c, 0x53,
    0x89, 0xa0, 0x83, 0xbf, 0x6d, 0x8f, 0x0f, 0x6e,
    0x8c, 0x96, 0xed, 0xec, 0xdd, 0x17, 0xc9, 0x9d,
    0xfd, 0x9f, 0xc8, 0x68, 0x1c, 0x96, 0xef, 0x36,
    0x12, 0x97, 0x47, 0xc8, 0x94, 0xa7, 0x48, 0x1a,
    0x86, 0x7e, 0x84, 0x68, 0x7c, 0x68, 0x1d, 0xe7,
    0x46, 0x83, 0xd4, 0x90, 0x93, 0xa1, 0x7e, 0x90,
    0x76, 0xfc, 0x7f, 0x59, 0x08, 0xf0, 0x1d, 0x61,
    0xb8, 0xfb, 0xf6, 0x3f, 0x4b, 0x65, 0xd0, 0xa2,
    0x0f, 0x42, 0xbc, 0xa4, 0x17, 0x66, 0xf3, 0x74,
    0xe7, 0x50, 0x27, 0x8c, 0x03, 0x08, 0x1a, 0x73,
    0x26, 0xb4, 0xf7, 0x69, 0x1f, 0xab, 0x9e, 0x51,
    0xd3, 0x10, 0xfe, 0xce, 0x67, 0x14, 0xa9, 0xca,
    0xd7, 0x4f, 0xa5, 0xc7, 0x1c, 0x66, 0xc5, 0x32,
    0x21, 0xeb, 0xc5, 0x0a, 0xfd, 0x0c, 0xcf, 0x9c,
    0xd9, 0xd1, 0x0d, 0x41, 0x84, 0xe2, 0x18, 0xc2,
    0x6e, 0xde, 0x21, 0x82, 0x2f, 0x99, 0xaf, 0x3c,
    0x1b, 0x12, 0xf3, 0x18, 0xb0, 0xd8, 0x14, 0x32,
    0xb6, 0x7d, 0xef, 0x46, 0x81, 0x9f, 0x17, 0x41,
    0x35, 0x05, 0xa6, 0x2b, 0xf7, 0xae, 0x26, 0xb5,
    0x8d, 0x29, 0xf2, 0xd4, 0x64, 0xd6, 0x8a, 0xac,
    0xf2, 0x72, 0x97, 0xb5, 0x21, 0x1a, 0x4d, 0xe9,
    0x94, 0x53, 0xc2, 0x47, 0x6a, 0x2b, 0xb6, 0x26,
    0xe4, 0xfb, 0x05, 0x8c, 0x71, 0x88, 0x90, 0xab,
    0xfc, 0x57, 0xf4, 0x73, 0xbb, 0x6e, 0x09, 0x77,
    0x78, 0x7a, 0x56, 0x48, 0x04, 0xb5, 0xb2, 0x33,
    0x33, 0x2f, 0x7e, 0x44, 0x1e, 0x9a, 0x3f, 0x3f,
    0xc8, 0xce, 0x9f, 0xc6, 0x19, 0xde, 0x37, 0x8e,
    0xc6, 0x34, 0x46, 0xd8, 0xe3, 0xef, 0x5e, 0x55,
];

/// Inputs and expected answer for the RSA signature known-answer test
pub struct RsaSignFixture {
    /// Modulus `n`, big-endian
    pub modulus: &'static [u8],

    /// Public exponent `e`, big-endian
    pub public_exponent: &'static [u8],

    /// Private exponent `d`, big-endian
    pub private_exponent: &'static [u8],

    /// Message digest handed to the signer
    pub message_hash: &'static [u8],

    /// Expected signature over [`Self::message_hash`]
    pub signature: &'static [u8],
}

/// Inputs and expected answer for the RSA encryption known-answer test
pub struct RsaCryptFixture {
    /// Modulus `n`, big-endian
    pub modulus: &'static [u8],

    /// Public exponent `e`, big-endian
    pub public_exponent: &'static [u8],

    /// Private exponent `d`, big-endian
    pub private_exponent: &'static [u8],

    /// Plaintext block, numerically below `n`
    pub plaintext: &'static [u8],

    /// Expected ciphertext for [`Self::plaintext`]
    pub ciphertext: &'static [u8],
}

/// RSA-2048 PKCS#1 v1.5 signature fixture over a SHA-256 digest
pub const RSA_2048_PKCS1_SHA256: RsaSignFixture = RsaSignFixture {
    modulus: &RSA_2048_MODULUS,
    public_exponent: &RSA_2048_PUBLIC_EXPONENT,
    private_exponent: &RSA_2048_PRIVATE_EXPONENT,
    message_hash: &PKCS1_SHA256_MESSAGE_HASH,
    signature: &PKCS1_SHA256_SIGNATURE,
};

/// RSA-2048 raw encryption fixture
pub const RSA_2048_RAW: RsaCryptFixture = RsaCryptFixture {
    modulus: &RSA_2048_MODULUS,
    public_exponent: &RSA_2048_PUBLIC_EXPONENT,
    private_exponent: &RSA_2048_PRIVATE_EXPONENT,
    plaintext: &RAW_PLAINTEXT,
    ciphertext: &RAW_CIPHERTEXT,
};
