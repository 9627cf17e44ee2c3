//! MAC provider trait

use crate::types::DigestAlgorithm;
use crate::Result;

/// Capability interface for the keyed-MAC primitive under test.
pub trait MacProvider {
    /// One-shot HMAC of `message` under `key`, written to `output`.
    ///
    /// Returns the number of bytes written, which must equal
    /// `algorithm.output_size()`.
    fn hmac(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
        message: &[u8],
        output: &mut [u8],
    ) -> Result<usize>;
}
