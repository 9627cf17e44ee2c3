//! RSA provider trait
//!
//! Covers both tested RSA families: PKCS#1 v1.5 signing and raw
//! encryption. The key object is built empty and loaded one component at a
//! time, mirroring primitive libraries that expose modulus and exponents as
//! separately settable fields; a provider that cannot represent a
//! half-loaded key may buffer components and materialize the key on first
//! use.

use crate::types::{DigestAlgorithm, RsaKeyField};
use crate::Result;
use zeroize::Zeroize;

/// Capability interface for the RSA primitive under test.
///
/// # Determinism
///
/// Every operation here must be a pure function of the key and inputs.
/// Signing is PKCS#1 v1.5 (deterministic padding); encryption is the raw
/// modular-exponentiation primitive with no padding. Randomized schemes do
/// not belong in this interface because a known-answer comparison is
/// meaningless for them.
pub trait RsaProvider {
    /// Provider-owned RSA key object.
    ///
    /// Must be zeroizable: the engine wipes the key on every exit path of a
    /// test, including failure branches.
    type Key: Zeroize;

    /// Construct an empty key object.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot allocate a key; the engine
    /// treats this as a test failure, not a crash.
    fn create_key(&self) -> Result<Self::Key>;

    /// Load one named key component from a big-endian byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is malformed or out of range for
    /// the provider.
    fn load_key_field(
        &self,
        key: &mut Self::Key,
        field: RsaKeyField,
        value: &[u8],
    ) -> Result<()>;

    /// Sign an already-computed message hash with RSASSA-PKCS1-v1_5.
    ///
    /// `message_hash` is the digest itself, not the message; `digest`
    /// selects the DigestInfo encoding used in the padding. The signature
    /// is written to `signature` and the number of bytes written is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unusable for signing, the hash length
    /// does not match `digest`, or `signature` is smaller than the modulus.
    fn pkcs1v15_sign(
        &self,
        key: &Self::Key,
        digest: DigestAlgorithm,
        message_hash: &[u8],
        signature: &mut [u8],
    ) -> Result<usize>;

    /// Verify an RSASSA-PKCS1-v1_5 signature over an already-computed
    /// message hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not verify. Verification
    /// failure is an `Err`, never a silent `Ok`.
    fn pkcs1v15_verify(
        &self,
        key: &Self::Key,
        digest: DigestAlgorithm,
        message_hash: &[u8],
        signature: &[u8],
    ) -> Result<()>;

    /// Raw RSA encryption (RSAEP): `ciphertext = plaintext^e mod n`.
    ///
    /// `plaintext` must already be modulus-sized with a value below the
    /// modulus; no padding is applied. Returns the number of ciphertext
    /// bytes written.
    fn raw_encrypt(
        &self,
        key: &Self::Key,
        plaintext: &[u8],
        ciphertext: &mut [u8],
    ) -> Result<usize>;

    /// Raw RSA decryption (RSADP): `plaintext = ciphertext^d mod n`.
    ///
    /// Returns the number of plaintext bytes written.
    fn raw_decrypt(
        &self,
        key: &Self::Key,
        ciphertext: &[u8],
        plaintext: &mut [u8],
    ) -> Result<usize>;
}
