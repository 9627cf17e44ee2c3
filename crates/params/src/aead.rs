//! Known-answer fixture for the AES-256-GCM self-test
//!
//! Test case 16 from the McGrew-Viega GCM validation vectors: 256-bit
//! key, 96-bit nonce, 60-byte plaintext, 20 bytes of additional data.

/// 256-bit AES key
pub const AES_256_GCM_KEY: [u8; 32] = [
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c,
    0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
    0xfe, 0xff, 0xe9, 0x92, 0x86, 0x65, 0x73, 0x1c,
    0x6d, 0x6a, 0x8f, 0x94, 0x67, 0x30, 0x83, 0x08,
];

/// 96-bit nonce
pub const AES_256_GCM_NONCE: [u8; 12] = [
    0xca, 0xfe, 0xba, 0xbe, 0xfa, 0xce, 0xdb, 0xad,
    0xde, 0xca, 0xf8, 0x88,
];

/// Additional authenticated data
pub const AES_256_GCM_AAD: [u8; 20] = [
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef,
    0xfe, 0xed, 0xfa, 0xce, 0xde, 0xad, 0xbe, 0xef,
    0xab, 0xad, 0xda, 0xd2,
];

/// Plaintext input
pub const AES_256_GCM_PLAINTEXT: [u8; 60] = [
    0xd9, 0x31, 0x32, 0x25, 0xf8, 0x84, 0x06, 0xe5,
    0xa5, 0x59, 0x09, 0xc5, 0xaf, 0xf5, 0x26, 0x9a,
    0x86, 0xa7, 0xa9, 0x53, 0x15, 0x34, 0xf7, 0xda,
    0x2e, 0x4c, 0x30, 0x3d, 0x8a, 0x31, 0x8a, 0x72,
    0x1c, 0x3c, 0x0c, 0x95, 0x95, 0x68, 0x09, 0x53,
    0x2f, 0xcf, 0x0e, 0x24, 0x49, 0xa6, 0xb5, 0x25,
    0xb1, 0x6a, 0xed, 0xf5, 0xaa, 0x0d, 0xe6, 0x57,
    0xba, 0x63, 0x7b, 0x39,
];

/// Expected ciphertext for [`AES_256_GCM_PLAINTEXT`]
pub const AES_256_GCM_CIPHERTEXT: [u8; 60] = [
    0x52, 0x2d, 0xc1, 0xf0, 0x99, 0x56, 0x7d, 0x07,
    0xf4, 0x7f, 0x37, 0xa3, 0x2a, 0x84, 0x42, 0x7d,
    0x64, 0x3a, 0x8c, 0xdc, 0xbf, 0xe5, 0xc0, 0xc9,
    0x75, 0x98, 0xa2, 0xbd, 0x25, 0x55, 0xd1, 0xaa,
    0x8c, 0xb0, 0x8e, 0x48, 0x59, 0x0d, 0xbb, 0x3d,
    0xa7, 0xb0, 0x8b, 0x10, 0x56, 0x82, 0x88, 0x38,
    0xc5, 0xf6, 0x1e, 0x63, 0x93, 0xba, 0x7a, 0x0a,
    0xbc, 0xc9, 0xf6, 0x62,
];

/// Expected 128-bit authentication tag
pub const AES_256_GCM_TAG: [u8; 16] = [
    0x76, 0xfc, 0x6e, 0xce, 0x0f, 0x4e, 0x17, 0x68,
    0xcd, 0xdf, 0x88, 0x53, 0xbb, 0x2d, 0x55, 0x1b,
];

/// Inputs and expected answer for the AEAD known-answer test
pub struct AeadFixture {
    /// Symmetric key
    pub key: &'static [u8],

    /// Nonce
    pub nonce: &'static [u8],

    /// Additional authenticated data
    pub aad: &'static [u8],

    /// Plaintext input
    pub plaintext: &'static [u8],

    /// Expected ciphertext, same length as the plaintext
    pub ciphertext: &'static [u8],

    /// Expected authentication tag
    pub tag: &'static [u8],
}

/// AES-256-GCM fixture
pub const AES_256_GCM: AeadFixture = AeadFixture {
    key: &AES_256_GCM_KEY,
    nonce: &AES_256_GCM_NONCE,
    aad: &AES_256_GCM_AAD,
    plaintext: &AES_256_GCM_PLAINTEXT,
    ciphertext: &AES_256_GCM_CIPHERTEXT,
    tag: &AES_256_GCM_TAG,
};
