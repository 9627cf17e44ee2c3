//! Hash provider trait

use crate::types::DigestAlgorithm;
use crate::Result;

/// Capability interface for the message-digest primitive under test.
pub trait HashProvider {
    /// One-shot digest of `message`, written to `output`.
    ///
    /// Returns the number of bytes written, which must equal
    /// `algorithm.output_size()`.
    fn digest(
        &self,
        algorithm: DigestAlgorithm,
        message: &[u8],
        output: &mut [u8],
    ) -> Result<usize>;
}
