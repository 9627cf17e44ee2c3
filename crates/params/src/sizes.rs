//! Fixed sizes shared by the self-test fixtures

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Byte length of an RSA-2048 modulus
pub const RSA_2048_BYTE_LENGTH: usize = 256;

/// Byte length of a P-256 field element or scalar
pub const P256_ELEMENT_SIZE: usize = 32;

/// Byte length of a fixed-width P-256 signature (`r || s`)
pub const P256_SIGNATURE_SIZE: usize = 2 * P256_ELEMENT_SIZE;

/// Key size of AES-256 in bytes
pub const AES_256_KEY_SIZE: usize = 32;

/// Nonce size used by GCM in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// Authentication tag size of GCM in bytes
pub const GCM_TAG_SIZE: usize = 16;
