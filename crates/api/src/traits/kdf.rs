//! KDF provider trait

use crate::types::DigestAlgorithm;
use crate::Result;

/// Capability interface for the key-derivation primitive under test
/// (HKDF, RFC 5869).
pub trait KdfProvider {
    /// HKDF-Extract: derive a pseudorandom key from `ikm` and `salt`,
    /// written to `prk`. Returns the number of bytes written, which must
    /// equal `algorithm.output_size()`.
    fn hkdf_extract(
        &self,
        algorithm: DigestAlgorithm,
        salt: &[u8],
        ikm: &[u8],
        prk: &mut [u8],
    ) -> Result<usize>;

    /// HKDF-Expand: derive `okm.len()` bytes of output keying material
    /// from `prk` and `info`, filling `okm` completely.
    fn hkdf_expand(
        &self,
        algorithm: DigestAlgorithm,
        prk: &[u8],
        info: &[u8],
        okm: &mut [u8],
    ) -> Result<()>;
}
