//! ECDSA provider trait

use crate::types::DigestAlgorithm;
use crate::Result;
use zeroize::Zeroize;

/// Capability interface for the ECDSA primitive under test (P-256).
///
/// Signing must be deterministic (RFC 6979 nonce derivation): the KAT
/// compares the produced signature byte-for-byte against a fixed vector,
/// which a randomized nonce would defeat. Signatures are fixed-width
/// `r || s` with each scalar zero-padded to the field size.
pub trait EcdsaProvider {
    /// Provider-owned EC key object, zeroized by the engine on every exit
    /// path of a test.
    type Key: Zeroize;

    /// Construct an empty key object.
    fn create_key(&self) -> Result<Self::Key>;

    /// Load the private scalar d from a big-endian byte buffer.
    fn load_private_scalar(&self, key: &mut Self::Key, scalar: &[u8]) -> Result<()>;

    /// Load the public point (x, y) from big-endian coordinate buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not on the curve.
    fn load_public_point(&self, key: &mut Self::Key, x: &[u8], y: &[u8]) -> Result<()>;

    /// Sign an already-computed message hash, writing `r || s` to
    /// `signature` and returning the number of bytes written.
    fn sign(
        &self,
        key: &Self::Key,
        digest: DigestAlgorithm,
        message_hash: &[u8],
        signature: &mut [u8],
    ) -> Result<usize>;

    /// Verify an `r || s` signature over an already-computed message hash.
    ///
    /// Verification failure is an `Err`, never a silent `Ok`.
    fn verify(
        &self,
        key: &Self::Key,
        digest: DigestAlgorithm,
        message_hash: &[u8],
        signature: &[u8],
    ) -> Result<()>;
}
