//! AEAD provider trait

use crate::Result;

/// Capability interface for the AEAD cipher under test (AES-256-GCM).
///
/// Symmetric key material is passed as a plain byte slice; unlike the
/// asymmetric families there is no component-wise key object to build.
/// Ciphertext and tag are separate buffers so the KAT can compare each
/// against its own expected vector.
pub trait AeadProvider {
    /// Encrypt and authenticate `plaintext` under `key`/`nonce` with
    /// associated data `aad`.
    ///
    /// Writes the ciphertext to `ciphertext` (same length as the
    /// plaintext) and the authentication tag to `tag`. Returns the number
    /// of ciphertext bytes written.
    fn seal(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        plaintext: &[u8],
        ciphertext: &mut [u8],
        tag: &mut [u8],
    ) -> Result<usize>;

    /// Verify the tag and decrypt `ciphertext`.
    ///
    /// Returns the number of plaintext bytes written.
    ///
    /// # Errors
    ///
    /// Returns an error on tag mismatch; no plaintext may be released in
    /// that case.
    fn open(
        &self,
        key: &[u8],
        nonce: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8],
        plaintext: &mut [u8],
    ) -> Result<usize>;
}
